//! Domain names in presentation format.
//!
//! The functions in this module operate on domain names as they appear in
//! zonefiles, i.e., as strings with labels separated by dots. A label may
//! contain a dot itself if it is escaped with a backslash, so a name can’t
//! simply be split at every dot. Instead, [`split`] produces a
//! [`LabelIndex`] with the escape-aware start offsets of all labels, which
//! allows slicing parts out of the original string as written.
//!
//! A name ending in an unescaped dot is fully qualified, see [`is_fqdn`].
//! The name `"."` is the root and has no labels.
//!
//! Names are not validated. Any string is accepted and treated according to
//! the rules above.

pub use self::cmp::{compare_domain_name, is_subdomain};
pub use self::fqdn::{fqdn, is_fqdn};
pub use self::index::{count_labels, split, LabelIndex, Labels};
pub use self::label::{label_eq, next_label, ESCAPE, SEPARATOR};

mod cmp;
mod fqdn;
mod index;
mod label;
