//! Widget construction

use super::composer::{ResolvedFragment, TemplateComposer};
use super::fragment::fragment_paths;
use super::resolver::{BaseDirResolver, PathResolver};
use super::{InputType, Style, Widget, WidgetError};
use crate::config::WidgetConfig;

/// Builds widgets for `(style, input type)` pairs
///
/// The factory holds no per-call state: every [`create`](Self::create) reads
/// and composes its fragments from scratch. It is meant to run at startup;
/// an error from `create` means the template catalog is broken.
///
/// # Examples
///
/// ```rust,no_run
/// use form_widgets::prelude::*;
///
/// # fn example() -> Result<(), WidgetError> {
/// let factory = WidgetFactory::new(BaseDirResolver::new("./templates"));
/// let widget = factory.create(&Style::BOOTSTRAP3, InputType::Email)?;
///
/// let html = widget.render(&minijinja::context! {
///     name => "email",
///     value => "a@b.com",
/// })?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WidgetFactory<R = BaseDirResolver> {
    resolver: R,
    composer: TemplateComposer,
}

impl WidgetFactory<BaseDirResolver> {
    /// Create a factory from configuration
    ///
    /// Templates are resolved under `templates.base_dir` and composed with
    /// the configured whitespace and undefined handling.
    #[must_use]
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            resolver: BaseDirResolver::new(config.templates.base_dir.clone()),
            composer: TemplateComposer::from_settings(&config.templates),
        }
    }
}

impl<R: PathResolver> WidgetFactory<R> {
    /// Create a factory with the default composer
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            composer: TemplateComposer::default(),
        }
    }

    /// Replace the composer
    #[must_use]
    pub fn with_composer(mut self, composer: TemplateComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Get the path resolver
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Build a widget
    ///
    /// # Errors
    ///
    /// Returns an error if any fragment is missing or fails to parse. No
    /// fallback widget is produced.
    pub fn create(&self, style: &Style, input_type: InputType) -> Result<Widget, WidgetError> {
        let fragments: Vec<ResolvedFragment> = fragment_paths(style, input_type)
            .into_iter()
            .map(|name| {
                let path = self.resolver.resolve(&name);
                ResolvedFragment { name, path }
            })
            .collect();

        let template = self.composer.compose(&fragments)?;

        tracing::debug!(
            %style,
            %input_type,
            fragments = fragments.len(),
            "Created widget"
        );

        Ok(Widget::new(template, style.clone(), input_type))
    }

    /// Build a widget from type and style names
    ///
    /// Unknown type names fall back to the generic input.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidStyle`] for an unusable style name, or
    /// any error [`create`](Self::create) returns.
    pub fn create_named(&self, style: &str, input_type: &str) -> Result<Widget, WidgetError> {
        let style = Style::new(style)?;
        self.create(&style, InputType::from_name(input_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::resolver::MockPathResolver;
    use mockall::Sequence;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn stub_catalog() -> TempDir {
        let dir = TempDir::new().unwrap();
        for style in ["base", "bootstrap3"] {
            fs::create_dir_all(dir.path().join(style)).unwrap();
            fs::write(
                dir.path().join(style).join("generic.tmpl"),
                format!("<div class=\"{style}\">{{% block widget %}}{{% endblock %}}</div>"),
            )
            .unwrap();
        }
        fs::create_dir_all(dir.path().join("text")).unwrap();
        fs::write(
            dir.path().join("text/textinput.html"),
            r#"{% block widget %}<input type="{{ input_type }}" name="{{ name }}" value="{{ value }}">{% endblock %}"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_resolves_fragments_in_order() {
        let root = PathBuf::from("/templates");
        let mut resolver = MockPathResolver::new();
        let mut seq = Sequence::new();

        for expected in ["bootstrap3/generic.tmpl", "text/textinput.html"] {
            let root = root.clone();
            resolver
                .expect_resolve()
                .withf(move |relative| relative.to_string() == expected)
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |relative| root.join(relative));
        }

        let factory = WidgetFactory::new(resolver);
        let err = factory
            .create(&Style::BOOTSTRAP3, InputType::Text)
            .unwrap_err();

        // Nothing exists under /templates, so the first read fails
        assert!(matches!(err, WidgetError::ReadFailed { ref path, .. } if path.ends_with("generic.tmpl")));
    }

    #[test]
    fn test_create_and_render() {
        let dir = stub_catalog();
        let factory = WidgetFactory::new(BaseDirResolver::new(dir.path()));

        let widget = factory.create(&Style::BOOTSTRAP3, InputType::Text).unwrap();
        let html = widget
            .render(&minijinja::context! { name => "email", value => "a@b.com" })
            .unwrap();

        assert_eq!(
            html,
            r#"<div class="bootstrap3"><input type="text" name="email" value="a@b.com"></div>"#
        );
        assert_eq!(
            widget.template_names(),
            ["bootstrap3/generic.tmpl", "text/textinput.html", "main"]
        );
    }

    #[test]
    fn test_create_is_deterministic() {
        let dir = stub_catalog();
        let factory = WidgetFactory::new(BaseDirResolver::new(dir.path()));
        let data = minijinja::context! { name => "q", value => "rust" };

        let first = factory.create(&Style::CLASSIC, InputType::Text).unwrap();
        let second = factory.create(&Style::CLASSIC, InputType::Text).unwrap();

        assert_eq!(first.render(&data).unwrap(), second.render(&data).unwrap());
    }

    #[test]
    fn test_missing_fragment_fails() {
        let dir = stub_catalog();
        let factory = WidgetFactory::new(BaseDirResolver::new(dir.path()));

        let err = factory
            .create(&Style::CLASSIC, InputType::Checkbox)
            .unwrap_err();
        assert!(matches!(err, WidgetError::ReadFailed { .. }));
    }

    #[test]
    fn test_non_ascii_custom_style() {
        let dir = stub_catalog();
        let style = Style::new("e\u{301}").unwrap();
        fs::create_dir_all(dir.path().join(style.dir())).unwrap();
        fs::write(
            dir.path().join(style.dir()).join("generic.tmpl"),
            "<span>{% block widget %}{% endblock %}</span>",
        )
        .unwrap();

        let factory = WidgetFactory::new(BaseDirResolver::new(dir.path()));
        let widget = factory.create(&style, InputType::Text).unwrap();
        let html = widget
            .render(&minijinja::context! { name => "q", value => "x" })
            .unwrap();

        assert_eq!(html, r#"<span><input type="text" name="q" value="x"></span>"#);
    }

    #[test]
    fn test_create_named() {
        let dir = stub_catalog();
        let factory = WidgetFactory::new(BaseDirResolver::new(dir.path()));

        let widget = factory.create_named("classic", "text").unwrap();
        assert_eq!(widget.style(), &Style::CLASSIC);
        assert_eq!(widget.input_type(), InputType::Text);

        assert!(matches!(
            factory.create_named("../etc", "text"),
            Err(WidgetError::InvalidStyle(_))
        ));
    }

    #[test]
    fn test_from_config_uses_base_dir() {
        let mut config = WidgetConfig::default();
        config.templates.base_dir = PathBuf::from("/srv/widgets");

        let factory = WidgetFactory::from_config(&config);
        assert_eq!(factory.resolver().base_dir(), PathBuf::from("/srv/widgets"));
    }
}
