//! Visual styles
//!
//! A style names the directory that holds its style-specific fragments. Two
//! styles ship with the crate; any other directory name is accepted as a
//! custom style as long as it stays a single path component.

use std::borrow::Cow;
use std::str::FromStr;

use super::WidgetError;

/// A validated style directory name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Style(Cow<'static, str>);

impl Style {
    /// Classic markup without a CSS framework
    pub const CLASSIC: Self = Self(Cow::Borrowed("base"));

    /// Twitter Bootstrap 3 markup
    pub const BOOTSTRAP3: Self = Self(Cow::Borrowed("bootstrap3"));

    /// Create a style from a directory name
    ///
    /// `classic` is accepted as an alias for [`Style::CLASSIC`].
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidStyle`] if the name is empty, contains a
    /// path separator, or is a relative path component (`.` or `..`).
    pub fn new(name: impl Into<String>) -> Result<Self, WidgetError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed.contains(['/', '\\'])
        {
            return Err(WidgetError::InvalidStyle(name));
        }

        match trimmed {
            "classic" | "base" => Ok(Self::CLASSIC),
            "bootstrap3" => Ok(Self::BOOTSTRAP3),
            other => Ok(Self(Cow::Owned(other.to_string()))),
        }
    }

    /// Directory name used to namespace style-specific fragments
    #[must_use]
    pub fn dir(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the styles shipped with the crate
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        *self == Self::CLASSIC || *self == Self::BOOTSTRAP3
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl FromStr for Style {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
