//! Input types a widget can be built for
//!
//! The set is closed: every name a caller can pass maps onto one variant, and
//! names without a dedicated template land on [`InputType::Other`].

use std::convert::Infallible;
use std::str::FromStr;

/// Logical form-input kinds the widget factory dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    /// Push button
    Button,
    /// Form reset button
    Reset,
    /// Form submit button
    Submit,
    /// Single checkbox
    Checkbox,
    /// Multi-line text
    Textarea,
    /// Select dropdown
    Select,
    /// Password input (masked)
    Password,
    /// Radio button group
    Radio,
    /// Text input
    Text,
    /// Range slider
    Range,
    /// Number input
    Number,
    /// Date input
    Date,
    /// Date and time input
    DateTime,
    /// Time input
    Time,
    /// Local date and time input
    DateTimeLocal,
    /// Static text, not an input
    Static,
    /// Search input
    Search,
    /// Telephone input
    Tel,
    /// URL input
    Url,
    /// Week input
    Week,
    /// Color picker
    Color,
    /// Email input
    Email,
    /// File upload
    File,
    /// Hidden input
    Hidden,
    /// Image button
    Image,
    /// Month input
    Month,
    /// Any type without a dedicated template (default)
    #[default]
    Other,
}

impl InputType {
    /// Every variant, in declaration order
    pub const ALL: [Self; 27] = [
        Self::Button,
        Self::Reset,
        Self::Submit,
        Self::Checkbox,
        Self::Textarea,
        Self::Select,
        Self::Password,
        Self::Radio,
        Self::Text,
        Self::Range,
        Self::Number,
        Self::Date,
        Self::DateTime,
        Self::Time,
        Self::DateTimeLocal,
        Self::Static,
        Self::Search,
        Self::Tel,
        Self::Url,
        Self::Week,
        Self::Color,
        Self::Email,
        Self::File,
        Self::Hidden,
        Self::Image,
        Self::Month,
        Self::Other,
    ];

    /// Get the HTML type attribute value
    ///
    /// Kinds that are not `<input>` elements (textarea, select, static) still
    /// report their name so templates can branch on it. `Other` renders as a
    /// plain text input.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Reset => "reset",
            Self::Submit => "submit",
            Self::Checkbox => "checkbox",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Password => "password",
            Self::Radio => "radio",
            Self::Text | Self::Other => "text",
            Self::Range => "range",
            Self::Number => "number",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::DateTimeLocal => "datetime-local",
            Self::Static => "static",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Week => "week",
            Self::Color => "color",
            Self::Email => "email",
            Self::File => "file",
            Self::Hidden => "hidden",
            Self::Image => "image",
            Self::Month => "month",
        }
    }

    /// Map a type name onto its variant
    ///
    /// Matching ignores ASCII case and surrounding whitespace. Unknown names
    /// yield [`InputType::Other`] rather than an error.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "reset" => Self::Reset,
            "submit" => Self::Submit,
            "checkbox" => Self::Checkbox,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "password" => Self::Password,
            "radio" => Self::Radio,
            "text" => Self::Text,
            "range" => Self::Range,
            "number" => Self::Number,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "time" => Self::Time,
            "datetime-local" => Self::DateTimeLocal,
            "static" => Self::Static,
            "search" => Self::Search,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "week" => Self::Week,
            "color" => Self::Color,
            "email" => Self::Email,
            "file" => Self::File,
            "hidden" => Self::Hidden,
            "image" => Self::Image,
            "month" => Self::Month,
            _ => Self::Other,
        }
    }
}

impl FromStr for InputType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
