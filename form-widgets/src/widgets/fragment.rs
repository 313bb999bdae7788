//! Fragment dispatch
//!
//! Maps an [`InputType`] onto the ordered template fragments that compose its
//! widget, and maps each fragment onto a logical template path for a style.
//!
//! Only the wrapper ([`Fragment::Generic`]) and the catch-all input
//! ([`Fragment::Input`]) live under a style directory. Every other fragment
//! is shared verbatim by all styles.

use super::{InputType, Style};

/// One template file contributing markup to a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Shared wrapper every widget starts from
    Generic,
    /// Catch-all `<input>` for types without a dedicated template
    Input,
    /// Button, reset and submit
    Button,
    /// Single checkbox
    Checkbox,
    /// Select dropdown
    Select,
    /// Radio button group
    Radio,
    /// Text input
    TextInput,
    /// Password input
    Password,
    /// Multi-line text
    Textarea,
    /// Range slider
    Range,
    /// Number input
    Number,
    /// Date input
    Date,
    /// Date and time input (local or not)
    DateTime,
    /// Time input
    Time,
    /// Static text
    Static,
}

impl Fragment {
    /// Every fragment, wrapper first
    pub const ALL: [Self; 15] = [
        Self::Generic,
        Self::Input,
        Self::Button,
        Self::Checkbox,
        Self::Select,
        Self::Radio,
        Self::TextInput,
        Self::Password,
        Self::Textarea,
        Self::Range,
        Self::Number,
        Self::Date,
        Self::DateTime,
        Self::Time,
        Self::Static,
    ];

    /// File path relative to the style directory or the templates root
    #[must_use]
    pub const fn file(self) -> &'static str {
        match self {
            Self::Generic => "generic.tmpl",
            Self::Input => "input.html",
            Self::Button => "button.html",
            Self::Checkbox => "options/checkbox.html",
            Self::Select => "options/select.html",
            Self::Radio => "options/radiobutton.html",
            Self::TextInput => "text/textinput.html",
            Self::Password => "text/passwordinput.html",
            Self::Textarea => "text/textareainput.html",
            Self::Range => "number/range.html",
            Self::Number => "number/number.html",
            Self::Date => "datetime/date.html",
            Self::DateTime => "datetime/datetime.html",
            Self::Time => "datetime/time.html",
            Self::Static => "static.html",
        }
    }

    /// Whether each style supplies its own variant of this fragment
    #[must_use]
    pub const fn is_style_specific(self) -> bool {
        matches!(self, Self::Generic | Self::Input)
    }
}

/// Select the ordered fragments that compose a widget
///
/// The result always starts with [`Fragment::Generic`]. Types that share a
/// template produce identical sequences.
#[must_use]
pub fn select_fragments(input_type: InputType) -> Vec<Fragment> {
    let specific = match input_type {
        InputType::Button | InputType::Reset | InputType::Submit => Fragment::Button,
        InputType::Checkbox => Fragment::Checkbox,
        InputType::Textarea => Fragment::Textarea,
        InputType::Select => Fragment::Select,
        InputType::Password => Fragment::Password,
        InputType::Radio => Fragment::Radio,
        InputType::Text => Fragment::TextInput,
        InputType::Range => Fragment::Range,
        InputType::Number => Fragment::Number,
        InputType::Date => Fragment::Date,
        InputType::DateTime | InputType::DateTimeLocal => Fragment::DateTime,
        InputType::Time => Fragment::Time,
        InputType::Static => Fragment::Static,
        InputType::Search
        | InputType::Tel
        | InputType::Url
        | InputType::Week
        | InputType::Color
        | InputType::Email
        | InputType::File
        | InputType::Hidden
        | InputType::Image
        | InputType::Month
        | InputType::Other => Fragment::Input,
    };

    vec![Fragment::Generic, specific]
}

/// Logical template path of a fragment for a style
///
/// Paths always use `/` separators so they double as template names.
#[must_use]
pub fn namespace(style: &Style, fragment: Fragment) -> String {
    if fragment.is_style_specific() {
        format!("{}/{}", style.dir(), fragment.file())
    } else {
        fragment.file().to_string()
    }
}

/// Logical template paths a widget is composed from, in order
///
/// Pure: nothing is resolved or read.
#[must_use]
pub fn fragment_paths(style: &Style, input_type: InputType) -> Vec<String> {
    select_fragments(input_type)
        .into_iter()
        .map(|fragment| namespace(style, fragment))
        .collect()
}
