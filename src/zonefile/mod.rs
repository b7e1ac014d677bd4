//! Zonefile conventions for domain names.

pub mod origin;
