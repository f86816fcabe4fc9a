//! Config field path used to address diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A config field path such as `site.url` or `nav[1].items[0].slug`.
///
/// Static paths come from `#[derive(Config)]`:
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteInfoConfig {
///     pub url: String,
/// }
///
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// ```
///
/// Paths into array-of-tables entries are built at runtime with [`FieldPath::owned`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn owned(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    /// Append a child key: `nav[0]` + `label` -> `nav[0].label`.
    pub fn join(&self, key: &str) -> Self {
        Self::owned(format!("{}.{}", self.0, key))
    }

    /// Append an array index: `nav` + 2 -> `nav[2]`.
    pub fn index(&self, i: usize) -> Self {
        Self::owned(format!("{}[{}]", self.0, i))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_and_index() {
        let path = FieldPath::new("nav").index(1).join("items").index(0).join("slug");
        assert_eq!(path.as_str(), "nav[1].items[0].slug");
    }
}
