//! Label offsets of presentation-format names.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use super::fqdn::is_fqdn;
use super::label::next_label;
use alloc::vec::Vec;
use core::fmt;

//------------ LabelIndex ----------------------------------------------------

/// A domain name in presentation format together with its label offsets.
///
/// The index keeps the original string and the offset of the first octet
/// of every label. Because the offsets are determined while taking escape
/// sequences into account, parts of the name can be sliced out of the
/// original string without having to parse the escapes again.
///
/// The root name `"."` has no labels at all. Every other string, including
/// the empty string, has at least one label starting at offset 0.
#[derive(Clone, Eq, PartialEq)]
pub struct LabelIndex<'a> {
    /// The name in presentation format.
    name: &'a str,

    /// The offsets of the first octet of each label.
    starts: Vec<usize>,
}

impl<'a> LabelIndex<'a> {
    /// Splits `name` into its labels.
    pub fn new(name: &'a str) -> Self {
        if name == "." {
            return LabelIndex {
                name,
                starts: Vec::new(),
            };
        }
        let mut starts = Vec::with_capacity(3);
        starts.push(0);
        let mut offset = 0;
        loop {
            let (next, end) = next_label(name, offset);
            if end {
                break;
            }
            starts.push(next);
            offset = next;
        }
        LabelIndex { name, starts }
    }

    /// Returns the name this index was created from.
    pub fn as_str(&self) -> &'a str {
        self.name
    }

    /// Returns the label start offsets.
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Returns the number of labels.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Returns whether there are no labels, i.e., the name is the root.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Returns the text of the label with the given index.
    ///
    /// The label is returned as written, escapes included, but without the
    /// separator that follows it.
    pub fn label(&self, idx: usize) -> Option<&'a str> {
        let start = *self.starts.get(idx)?;
        let end = match self.starts.get(idx + 1) {
            Some(next) => next - 1,
            None if is_fqdn(self.name) => self.name.len() - 1,
            None => self.name.len(),
        };
        Some(&self.name[start..end])
    }

    /// Returns the label with the given index including its separator.
    ///
    /// For the last label, this is everything up to the end of the name, so
    /// it carries the trailing dot only if the name is an FQDN.
    pub fn label_with_separator(&self, idx: usize) -> Option<&'a str> {
        let start = *self.starts.get(idx)?;
        let end = self
            .starts
            .get(idx + 1)
            .copied()
            .unwrap_or(self.name.len());
        Some(&self.name[start..end])
    }

    /// Returns an iterator over the labels.
    pub fn iter(&self) -> Labels<'a, '_> {
        Labels {
            index: self,
            pos: 0,
        }
    }

    /// Returns the first `count` labels of the name.
    ///
    /// The separator following the last included label is not part of the
    /// result. Asking for all labels of an FQDN therefore only drops the
    /// trailing dot. A relative name is returned in full.
    pub fn prefix(&self, count: usize) -> &'a str {
        if count == 0 {
            return "";
        }
        match self.starts.get(count) {
            Some(start) => &self.name[..start - 1],
            None if is_fqdn(self.name) => &self.name[..self.name.len() - 1],
            None => self.name,
        }
    }
}

//--- Debug

impl<'a> fmt::Debug for LabelIndex<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LabelIndex")
            .field("name", &self.name)
            .field("starts", &self.starts)
            .finish()
    }
}

//--- IntoIterator

impl<'a, 'i> IntoIterator for &'i LabelIndex<'a> {
    type Item = &'a str;
    type IntoIter = Labels<'a, 'i>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//------------ Labels --------------------------------------------------------

/// An iterator over the labels of a [`LabelIndex`].
#[derive(Clone, Debug)]
pub struct Labels<'a, 'i> {
    index: &'i LabelIndex<'a>,
    pos: usize,
}

impl<'a, 'i> Iterator for Labels<'a, 'i> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let res = self.index.label(self.pos)?;
        self.pos += 1;
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.index.len().saturating_sub(self.pos);
        (len, Some(len))
    }
}

impl<'a, 'i> ExactSizeIterator for Labels<'a, 'i> {}

//------------ split and count_labels ----------------------------------------

/// Splits a name into its labels.
pub fn split(name: &str) -> LabelIndex<'_> {
    LabelIndex::new(name)
}

/// Returns the number of labels in a name.
///
/// This gives the same result as `split(name).len()` without allocating.
pub fn count_labels(name: &str) -> usize {
    if name == "." {
        return 0;
    }
    let mut count = 0;
    let mut offset = 0;
    loop {
        let (next, end) = next_label(name, offset);
        count += 1;
        if end {
            return count;
        }
        offset = next;
    }
}

//============ Testing =======================================================
