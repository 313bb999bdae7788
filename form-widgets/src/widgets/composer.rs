//! Template composition
//!
//! Loads an ordered list of fragments into one minijinja environment. Each
//! fragment after the first extends the one before it, so blocks defined by
//! later fragments replace the same blocks of earlier ones. The composed unit
//! is invoked through the fixed entry point [`ENTRY_POINT`], which extends the
//! last fragment.

use std::path::PathBuf;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use serde::Serialize;

use super::WidgetError;
use crate::config::TemplateSettings;

/// Name of the template every composed unit is invoked through
pub const ENTRY_POINT: &str = "main";

/// A fragment paired with the file it was resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFragment {
    /// Logical template name, e.g. `bootstrap3/generic.tmpl`
    pub name: String,
    /// File the fragment is loaded from
    pub path: PathBuf,
}

impl ResolvedFragment {
    /// Pair a logical name with a file
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Parses fragments and merges them into a [`ComposedTemplate`]
#[derive(Debug, Clone, Copy)]
pub struct TemplateComposer {
    trim_blocks: bool,
    lstrip_blocks: bool,
    strict_undefined: bool,
}

impl Default for TemplateComposer {
    fn default() -> Self {
        Self::from_settings(&TemplateSettings::default())
    }
}

impl TemplateComposer {
    /// Create a composer with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a composer from template settings
    #[must_use]
    pub const fn from_settings(settings: &TemplateSettings) -> Self {
        Self {
            trim_blocks: settings.trim_blocks,
            lstrip_blocks: settings.lstrip_blocks,
            strict_undefined: settings.strict_undefined,
        }
    }

    /// Fail rendering when templates reference data the caller did not supply
    #[must_use]
    pub const fn with_strict_undefined(mut self, strict: bool) -> Self {
        self.strict_undefined = strict;
        self
    }

    /// Load and compose fragments in order
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::EmptyComposition`] for an empty list,
    /// [`WidgetError::ReservedName`] if a fragment is named [`ENTRY_POINT`],
    /// [`WidgetError::ReadFailed`] if a file cannot be read, and
    /// [`WidgetError::Template`] if a fragment does not parse.
    pub fn compose(&self, fragments: &[ResolvedFragment]) -> Result<ComposedTemplate, WidgetError> {
        let Some(last) = fragments.last() else {
            return Err(WidgetError::EmptyComposition);
        };

        if let Some(fragment) = fragments.iter().find(|f| f.name == ENTRY_POINT) {
            return Err(WidgetError::ReservedName(fragment.name.clone()));
        }

        let mut env = Environment::new();
        env.set_trim_blocks(self.trim_blocks);
        env.set_lstrip_blocks(self.lstrip_blocks);
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        if self.strict_undefined {
            env.set_undefined_behavior(UndefinedBehavior::Strict);
        }

        let mut parent: Option<&str> = None;
        for fragment in fragments {
            let content = std::fs::read_to_string(&fragment.path).map_err(|source| {
                WidgetError::ReadFailed {
                    path: fragment.path.clone(),
                    source,
                }
            })?;

            let source = match parent {
                Some(parent) => format!("{}{content}", extends(parent)?),
                None => content,
            };
            env.add_template_owned(fragment.name.clone(), source)?;
            parent = Some(fragment.name.as_str());
        }

        env.add_template_owned(ENTRY_POINT, extends(&last.name)?)?;

        tracing::debug!(
            fragments = fragments.len(),
            entry = %last.name,
            "Composed widget template"
        );

        let mut names: Vec<String> = fragments.iter().map(|f| f.name.clone()).collect();
        names.push(ENTRY_POINT.to_string());

        Ok(ComposedTemplate { env, names })
    }
}

/// `extends` tag for a parent template
///
/// JSON string quoting is a subset of what the template lexer accepts, so any
/// name survives, non-ASCII included.
fn extends(parent: &str) -> Result<String, WidgetError> {
    let quoted = serde_json::to_string(parent)?;
    Ok(format!("{{% extends {quoted} %}}"))
}

/// A composed, parsed template unit
///
/// Read-only after construction; rendering never mutates it.
#[derive(Debug)]
pub struct ComposedTemplate {
    env: Environment<'static>,
    names: Vec<String>,
}

impl ComposedTemplate {
    /// Add a global visible to every fragment
    #[must_use]
    pub fn with_global(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.env.add_global(name, value.into());
        self
    }

    /// Render the entry point against `data`
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Template`] if execution fails, for example when
    /// strict undefined handling is on and `data` lacks a referenced field.
    pub fn render<S: Serialize>(&self, data: S) -> Result<String, WidgetError> {
        self.env
            .get_template(ENTRY_POINT)
            .and_then(|tmpl| tmpl.render(data))
            .map_err(Into::into)
    }

    /// Names of the templates in this unit in composition order, entry point last
    #[must_use]
    pub fn template_names(&self) -> &[String] {
        &self.names
    }
}
