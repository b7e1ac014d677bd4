//! Comparing names by their trailing labels.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use super::index::{count_labels, LabelIndex};
use super::label::label_eq;

/// Returns the number of trailing labels two names have in common.
///
/// Labels are compared from the right, ignoring ASCII case, and the
/// comparison stops at the first label that differs. Each label is compared
/// together with the separator that follows it, so a fully qualified and a
/// relative name never share their last label. If either name is the root,
/// they have nothing in common.
///
/// `www.example.com.` and `example.com.` share two labels, `www.example.com.`
/// and `mail.test.com.` one.
pub fn compare_domain_name(left: &str, right: &str) -> usize {
    if left == "." || right == "." {
        return 0;
    }
    let left = LabelIndex::new(left);
    let right = LabelIndex::new(right);
    (0..left.len())
        .rev()
        .zip((0..right.len()).rev())
        .take_while(|&(l, r)| {
            left.label_with_separator(l)
                .zip(right.label_with_separator(r))
                .map_or(false, |(l, r)| label_eq(l, r))
        })
        .count()
}

/// Returns whether `child` is equal to or below `parent`.
///
/// The test is done by whole labels, so an escaped separator inside a label
/// of `child` is never mistaken for a label boundary. Every name is a
/// subdomain of the root.
pub fn is_subdomain(parent: &str, child: &str) -> bool {
    compare_domain_name(parent, child) == count_labels(parent)
}

//============ Testing =======================================================
