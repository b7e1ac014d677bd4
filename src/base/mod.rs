//! Basics.
//!
//! This module provides the fundamental functionality for dealing with
//! domain names in their presentation format, i.e., as they appear in
//! zonefiles. Currently, this is the [name] module with escape-aware label
//! splitting and comparison.

pub mod name;
