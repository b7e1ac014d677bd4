//! Fully qualified names.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use super::label::{is_escaped, SEPARATOR};
use alloc::borrow::Cow;
use alloc::string::String;

/// Returns whether a name is fully qualified.
///
/// A name is fully qualified if it ends in a separator that isn’t itself
/// escaped. `"."` is fully qualified, the empty string is not.
pub fn is_fqdn(name: &str) -> bool {
    let bytes = name.as_bytes();
    match bytes.last() {
        Some(&SEPARATOR) => !is_escaped(bytes, bytes.len() - 1),
        _ => false,
    }
}

/// Returns the fully qualified form of a name.
///
/// An FQDN is returned unchanged. Anything else gets a separator appended,
/// which turns the empty string into the root name `"."`.
pub fn fqdn(name: &str) -> Cow<str> {
    if is_fqdn(name) {
        Cow::Borrowed(name)
    } else {
        let mut res = String::with_capacity(name.len() + 1);
        res.push_str(name);
        res.push(SEPARATOR as char);
        Cow::Owned(res)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn qualified() {
        assert!(is_fqdn("."));
        assert!(is_fqdn("com."));
        assert!(is_fqdn("www.example.com."));
        assert!(is_fqdn(r"a\\."));
        assert!(is_fqdn(r"a\\\\."));
    }

    #[test]
    fn relative() {
        assert!(!is_fqdn(""));
        assert!(!is_fqdn("com"));
        assert!(!is_fqdn(r"a\."));
        assert!(!is_fqdn(r"a\\\."));
        assert!(!is_fqdn(r"\."));
        assert!(!is_fqdn("@"));
    }

    #[test]
    fn coerce() {
        assert_eq!(fqdn("com"), "com.");
        assert_eq!(fqdn("com."), "com.");
        assert!(matches!(fqdn("com."), Cow::Borrowed(_)));
        assert_eq!(fqdn(""), ".");
        assert_eq!(fqdn("."), ".");
        assert_eq!(fqdn(r"a\."), r"a\..");
    }
}
