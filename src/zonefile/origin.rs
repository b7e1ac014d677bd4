//! Qualifying and relativizing names against a zonefile origin.
//!
//! [RFC 1035, section 5.1] allows names in a zonefile to be given relative
//! to the current origin. A name not ending in a dot has the origin
//! appended to it, and the special name `@` stands for the origin itself,
//! i.e., the apex of the zone.
//!
//! [`add_origin`] turns such a possibly relative name into its qualified
//! form, while [`trim_domain_name`] does the reverse and strips the origin
//! off a name that lies within it. [`Origin`] wraps an origin string and
//! provides both operations as methods.
//!
//! [RFC 1035, section 5.1]: https://tools.ietf.org/html/rfc1035#section-5.1

use crate::base::name::{
    compare_domain_name, count_labels, fqdn, is_fqdn, is_subdomain, split,
    SEPARATOR,
};
use alloc::borrow::Cow;
use alloc::string::String;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;
use tracing::trace;

//------------ Constants -----------------------------------------------------

/// The name denoting the apex of a zone, i.e., the origin itself.
pub const APEX: &str = "@";

/// The root origin.
const ROOT: &str = ".";

//------------ add_origin ----------------------------------------------------

/// Qualifies `name` with `origin` unless it already is fully qualified.
///
/// The first of the following rules that applies determines the result:
///
/// * an FQDN is returned unchanged,
/// * if `origin` is empty, `name` is returned unchanged,
/// * the apex `@` and the empty name expand to `origin`,
/// * if `origin` is the root `"."`, `name` gets a trailing dot,
/// * otherwise, `origin` is appended to `name` separated by a dot.
///
/// Note that the result is only fully qualified if `origin` is. A relative
/// origin gives a relative result.
///
/// ```
/// use domain_origin::zonefile::origin::add_origin;
///
/// assert_eq!(add_origin("www", "example.com."), "www.example.com.");
/// assert_eq!(add_origin("www.", "example.com."), "www.");
/// assert_eq!(add_origin("@", "example.com."), "example.com.");
/// assert_eq!(add_origin("www", "."), "www.");
/// assert_eq!(add_origin("www", "example"), "www.example");
/// ```
pub fn add_origin<'a>(name: &'a str, origin: &'a str) -> Cow<'a, str> {
    if is_fqdn(name) {
        trace!(%name, "already fully qualified");
        return Cow::Borrowed(name);
    }
    if origin.is_empty() {
        trace!(%name, "empty origin");
        return Cow::Borrowed(name);
    }
    if name == APEX || name.is_empty() {
        trace!(%name, %origin, "expanding apex");
        return Cow::Borrowed(origin);
    }
    if origin == ROOT {
        trace!(%name, "root origin");
        return fqdn(name);
    }
    let mut res = String::with_capacity(name.len() + origin.len() + 1);
    res.push_str(name);
    res.push(SEPARATOR as char);
    res.push_str(origin);
    Cow::Owned(res)
}

//------------ trim_domain_name ----------------------------------------------

/// Removes `origin` from the end of `name` if `name` is within it.
///
/// Whether `origin` is fully qualified or not makes no difference, nor
/// does it for `name`. Both are compared in their qualified form by whole
/// labels. If `name` is not a subdomain of `origin`, it is returned exactly
/// as given. A returned name that still ends in a dot thus tells that the
/// name wasn’t within the origin.
///
/// The result is never empty. If `name` is empty or equal to `origin`, the
/// apex [`APEX`] is returned instead.
///
/// An `origin` of `"."` is special: a single trailing dot is removed from
/// `name`, without looking at its labels at all. An empty `origin` also
/// stands for the root. Every name lies within it and only loses its
/// trailing dot, with `"."` itself becoming the apex. A name ending in an
/// escape, such as `a\`, has no trailing dot and is returned unchanged.
///
/// ```
/// use domain_origin::zonefile::origin::trim_domain_name;
///
/// assert_eq!(trim_domain_name("www.example.com.", "example.com."), "www");
/// assert_eq!(trim_domain_name("example.com.", "example.com"), "@");
/// assert_eq!(trim_domain_name("www.example.org.", "example.com."), "www.example.org.");
/// assert_eq!(trim_domain_name("www.example.", "."), "www.example");
/// ```
pub fn trim_domain_name<'a>(name: &'a str, origin: &str) -> &'a str {
    if name.is_empty() {
        return APEX;
    }
    if origin == ROOT {
        trace!(%name, "root origin, removing trailing dot");
        let res = name.strip_suffix(ROOT).unwrap_or(name);
        return if res.is_empty() { APEX } else { res };
    }

    let qualified = fqdn(name);
    let origin = fqdn(origin);
    if !is_subdomain(&origin, &qualified) {
        trace!(%name, %origin, "not within origin");
        return name;
    }

    let labels = split(&qualified);
    let origin_len = count_labels(&origin);
    let shared = compare_domain_name(&qualified, &origin);
    if origin_len == shared {
        if origin_len == labels.len() {
            trace!(%name, %origin, "name is the origin");
            return APEX;
        }
        // A leading empty label, as in ".example." trimmed by "example."
        if qualified.as_bytes().first() == Some(&SEPARATOR)
            && labels.len() == origin_len + 1
        {
            trace!(%name, %origin, "leading empty label before origin");
            return APEX;
        }
    }

    // The qualified name is either `name` itself or `name` with a dot
    // appended. If `name` ends in an escape, that dot is escaped and
    // `qualified` isn't an FQDN, so the prefix of all its labels is all of
    // it. Bounded by `name`, the result is always a prefix of `name`.
    let end = labels.prefix(labels.len() - shared).len();
    &name[..end.min(name.len())]
}

//------------ Origin --------------------------------------------------------

/// The origin of a zonefile.
///
/// This is the name relative names are interpreted against. The value is
/// kept exactly as given. Neither qualification nor validation happens on
/// creation. The empty origin is the default.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin(String);

impl Origin {
    /// Creates a new origin.
    pub fn new(origin: impl Into<String>) -> Self {
        Origin(origin.into())
    }

    /// Creates the root origin `"."`.
    pub fn root() -> Self {
        Origin(String::from(ROOT))
    }

    /// Returns the origin as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the origin into its underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns whether this is the root origin.
    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    /// Returns whether the origin is fully qualified.
    pub fn is_fqdn(&self) -> bool {
        is_fqdn(&self.0)
    }

    /// Qualifies `name` with this origin.
    ///
    /// See [`add_origin`] for the rules applied.
    pub fn qualify<'a>(&'a self, name: &'a str) -> Cow<'a, str> {
        add_origin(name, &self.0)
    }

    /// Strips this origin off `name`.
    ///
    /// See [`trim_domain_name`] for the rules applied.
    pub fn relativize<'a>(&self, name: &'a str) -> &'a str {
        trim_domain_name(name, &self.0)
    }
}

//--- From and FromStr

impl<'a> From<&'a str> for Origin {
    fn from(origin: &'a str) -> Self {
        Origin::new(origin)
    }
}

impl From<String> for Origin {
    fn from(origin: String) -> Self {
        Origin(origin)
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.0
    }
}

impl FromStr for Origin {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Origin::new(s))
    }
}

//--- AsRef

impl AsRef<str> for Origin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//--- Display

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//============ Testing =======================================================
