//! Renderable widgets

use minijinja::Value;
use serde::Serialize;

use super::composer::ComposedTemplate;
use super::{InputType, Style, WidgetError};

/// Anything a form field can render itself with
///
/// [`Widget`] implements this; custom widgets can too, so a field layer can
/// hold `Box<dyn RenderWidget>` without caring where the markup comes from.
pub trait RenderWidget: Send + Sync {
    /// Render the widget against a template value
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying template fails to execute.
    fn render_value(&self, data: Value) -> Result<String, WidgetError>;
}

/// A composed template ready to render one input type in one style
///
/// Widgets are immutable. Rendering reads the composed template and the
/// supplied data only, so a widget can be shared and rendered concurrently.
#[derive(Debug)]
pub struct Widget {
    template: ComposedTemplate,
    style: Style,
    input_type: InputType,
}

impl Widget {
    pub(crate) fn new(template: ComposedTemplate, style: Style, input_type: InputType) -> Self {
        let template = template
            .with_global("input_type", input_type.as_str())
            .with_global("widget_style", style.dir().to_string());

        Self {
            template,
            style,
            input_type,
        }
    }

    /// Render the widget
    ///
    /// Templates see the fields of `data` plus the globals `input_type` (the
    /// HTML type attribute) and `widget_style`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Template`] if execution fails against `data`.
    pub fn render<S: Serialize>(&self, data: &S) -> Result<String, WidgetError> {
        self.template.render(data)
    }

    /// Render the widget, degrading to an empty string on failure
    ///
    /// The failure is logged at warn level.
    #[must_use]
    pub fn render_lossy<S: Serialize>(&self, data: &S) -> String {
        self.render(data).unwrap_or_else(|e| {
            tracing::warn!(
                style = %self.style,
                input_type = %self.input_type,
                error = %e,
                "Widget render failed"
            );
            String::new()
        })
    }

    /// Style this widget was built for
    #[must_use]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// Input type this widget was built for
    #[must_use]
    pub const fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Names of the composed templates, entry point last
    #[must_use]
    pub fn template_names(&self) -> &[String] {
        self.template.template_names()
    }
}

impl RenderWidget for Widget {
    fn render_value(&self, data: Value) -> Result<String, WidgetError> {
        self.render(&data)
    }
}
