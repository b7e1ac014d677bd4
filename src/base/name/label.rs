//! Scanning of labels in presentation-format domain names.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

//------------ Constants -----------------------------------------------------

/// The character separating labels in presentation format.
pub const SEPARATOR: u8 = b'.';

/// The character starting an escape sequence in presentation format.
pub const ESCAPE: u8 = b'\\';

//------------ next_label ----------------------------------------------------

/// Returns the offset of the label following the one containing `offset`.
///
/// The name is scanned starting at `offset` for the next unescaped
/// separator. If one is found, the offset right after it is returned
/// together with `false`. Otherwise, the end of the name has been reached
/// and the returned boolean is `true`. In this case, the returned offset
/// carries no meaning and should be ignored.
///
/// A separator is escaped if it is preceded by an odd number of
/// backslashes. The final character of the name is never considered a
/// separator, so a trailing dot ends the last label rather than starting
/// an empty one.
pub fn next_label(name: &str, offset: usize) -> (usize, bool) {
    let bytes = name.as_bytes();
    if bytes.is_empty() {
        return (0, true);
    }
    let last = bytes.len() - 1;
    let mut i = offset;
    while i < last {
        if bytes[i] == SEPARATOR && !is_escaped(bytes, i) {
            return (i + 1, false);
        }
        i += 1;
    }
    (i + 1, true)
}

/// Returns whether the octet at `pos` is preceded by an escape.
///
/// Escapes can themselves be escaped, so we need to count how many
/// backslashes come right before `pos`.
pub(super) fn is_escaped(bytes: &[u8], pos: usize) -> bool {
    let run = bytes[..pos]
        .iter()
        .rev()
        .take_while(|&&ch| ch == ESCAPE)
        .count();
    run % 2 == 1
}

//------------ label_eq ------------------------------------------------------

/// Compares two label slices ignoring ASCII case.
///
/// The slices are compared as written, i.e., escape sequences are not
/// decoded. `\065` and `A` are therefore different.
pub fn label_eq(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
}

//============ Testing =======================================================
