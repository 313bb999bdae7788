//! Default template catalog
//!
//! The crate ships markup for both built-in styles and every shared fragment.
//! The catalog is compiled in and written to disk with [`install`], after
//! which a [`BaseDirResolver`](super::BaseDirResolver) pointed at the same
//! directory can build any widget.
//!
//! Templates read these fields from render data, all optional except `name`:
//! `id` (defaults to `name`), `label`, `value`, `placeholder`, `help_text`,
//! `errors` (list), `classes` (list), `params` (map of extra attributes),
//! `disabled`, `required`, plus `checked` for checkboxes, `choices` (list of
//! `{value, label}`) and `multiple` for selects and radios, `rows` and `cols`
//! for textareas, and `min`, `max`, `step` for numeric and date inputs.

use std::path::Path;

use super::fragment::{namespace, Fragment};
use super::{Style, WidgetError};

static DEFAULT_TEMPLATES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    // Style-specific
    "base/generic.tmpl" => include_str!("defaults/base/generic.tmpl"),
    "base/input.html" => include_str!("defaults/base/input.html"),
    "bootstrap3/generic.tmpl" => include_str!("defaults/bootstrap3/generic.tmpl"),
    "bootstrap3/input.html" => include_str!("defaults/bootstrap3/input.html"),
    // Shared
    "button.html" => include_str!("defaults/button.html"),
    "options/checkbox.html" => include_str!("defaults/options/checkbox.html"),
    "options/select.html" => include_str!("defaults/options/select.html"),
    "options/radiobutton.html" => include_str!("defaults/options/radiobutton.html"),
    "text/textinput.html" => include_str!("defaults/text/textinput.html"),
    "text/passwordinput.html" => include_str!("defaults/text/passwordinput.html"),
    "text/textareainput.html" => include_str!("defaults/text/textareainput.html"),
    "number/range.html" => include_str!("defaults/number/range.html"),
    "number/number.html" => include_str!("defaults/number/number.html"),
    "datetime/date.html" => include_str!("defaults/datetime/date.html"),
    "datetime/datetime.html" => include_str!("defaults/datetime/datetime.html"),
    "datetime/time.html" => include_str!("defaults/datetime/time.html"),
    "static.html" => include_str!("defaults/static.html"),
};

/// Get the default content of a template
#[must_use]
pub fn get(name: &str) -> Option<&'static str> {
    DEFAULT_TEMPLATES.get(name).copied()
}

/// Names of all default templates, sorted
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = DEFAULT_TEMPLATES.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Template names a style needs, shared fragments included
#[must_use]
pub fn required_for(style: &Style) -> Vec<String> {
    Fragment::ALL
        .into_iter()
        .map(|fragment| namespace(style, fragment))
        .collect()
}

/// Write the default catalog under `dir`
///
/// Existing files are kept unless `overwrite` is set, so local edits survive
/// a reinstall. Returns the number of files written.
///
/// # Errors
///
/// Returns [`WidgetError::Install`] if a directory or file cannot be written.
pub fn install(dir: &Path, overwrite: bool) -> Result<usize, WidgetError> {
    let mut written = 0;

    let mut entries: Vec<(&str, &str)> = DEFAULT_TEMPLATES
        .entries()
        .map(|(name, content)| (*name, *content))
        .collect();
    entries.sort_unstable();

    for (name, content) in entries {
        let path = name
            .split('/')
            .fold(dir.to_path_buf(), |path, segment| path.join(segment));

        if path.exists() && !overwrite {
            tracing::debug!(template = name, "Keeping existing template");
            continue;
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| WidgetError::Install {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&path, content).map_err(|source| {
            WidgetError::Install {
                path: path.clone(),
                source,
            }
        })?;
        written += 1;
    }

    tracing::debug!(dir = %dir.display(), written, "Installed default templates");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_styles_are_complete() {
        for style in [Style::CLASSIC, Style::BOOTSTRAP3] {
            for name in required_for(&style) {
                assert!(get(&name).is_some(), "Missing default template: {name}");
            }
        }
    }

    #[test]
    fn test_catalog_has_no_strays() {
        let mut expected: Vec<String> = required_for(&Style::CLASSIC);
        expected.extend(required_for(&Style::BOOTSTRAP3));
        expected.sort();
        expected.dedup();

        assert_eq!(names(), expected);
    }

    #[test]
    fn test_install_writes_every_template() {
        let dir = TempDir::new().unwrap();
        let written = install(dir.path(), false).unwrap();

        assert_eq!(written, names().len());
        assert!(dir.path().join("bootstrap3").join("generic.tmpl").exists());
        assert!(dir.path().join("options").join("checkbox.html").exists());
    }

    #[test]
    fn test_install_keeps_local_edits() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("static.html"), "custom").unwrap();

        let written = install(dir.path(), false).unwrap();
        assert_eq!(written, names().len() - 1);
        assert_eq!(fs::read_to_string(dir.path().join("static.html")).unwrap(), "custom");

        let written = install(dir.path(), true).unwrap();
        assert_eq!(written, names().len());
        assert_eq!(
            fs::read_to_string(dir.path().join("static.html")).unwrap(),
            get("static.html").unwrap()
        );
    }
}
