//! Zonefile-style handling of relative domain names.
//!
//! In a zonefile, domain names are usually given relative to the origin of
//! the zone. This crate provides the conversions between such relative
//! names and their qualified form as described in [RFC 1035, section
//! 5.1], including the `@` shorthand for the apex of the zone.
//!
//! The crate operates on names in presentation format, i.e., on strings.
//! Names are split into labels taking escape sequences into account, so
//! `a\.b.example.` has two labels, `a\.b` and `example`.
//!
//! # Modules
//!
//! * [base] contains the primitives for dealing with presentation-format
//!   names: splitting into labels, checking for and producing fully
//!   qualified names, and comparing names by their trailing labels.
//! * [zonefile] contains the conversions themselves: adding an origin to a
//!   relative name and trimming it off again.
//!
//! ```
//! use domain_origin::zonefile::origin::{add_origin, trim_domain_name};
//!
//! let name = add_origin("www", "example.com.");
//! assert_eq!(name, "www.example.com.");
//! assert_eq!(trim_domain_name(&name, "example.com."), "www");
//! ```
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serializing and deserializing
//!   [`Origin`][zonefile::origin::Origin] via
//!   [serde](https://github.com/serde-rs/serde). This implies `std`.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default.
//!
//! [RFC 1035, section 5.1]: https://tools.ietf.org/html/rfc1035#section-5.1

#![no_std]
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", test))]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

extern crate alloc;

pub mod base;
pub mod zonefile;
