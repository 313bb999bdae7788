//! Template path resolution
//!
//! Turns the logical path of a fragment into a file the composer can read.
//! Resolution never touches template content; a resolver may return a path
//! that does not exist, and the composer reports it.

use std::path::{Path, PathBuf};

use super::WidgetError;

/// Maps a logical template path onto a loadable file
#[cfg_attr(test, mockall::automock)]
pub trait PathResolver {
    /// Resolve a `/`-separated path relative to the templates root
    fn resolve(&self, relative: &str) -> PathBuf;
}

fn join_logical(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

/// Resolves templates under a single base directory
#[derive(Debug, Clone)]
pub struct BaseDirResolver {
    base_dir: PathBuf,
}

impl BaseDirResolver {
    /// Create a resolver rooted at `base_dir`
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl PathResolver for BaseDirResolver {
    fn resolve(&self, relative: &str) -> PathBuf {
        join_logical(&self.base_dir, relative)
    }
}

/// Resolves templates from XDG directories
///
/// User customizations in `$XDG_CONFIG_HOME/form-widgets/templates/` win over
/// installed defaults in `$XDG_CACHE_HOME/form-widgets/templates/`. When a
/// template exists in neither, the cache location is returned.
#[derive(Debug, Clone)]
pub struct XdgResolver {
    config_dir: PathBuf,
    cache_dir: PathBuf,
}

impl XdgResolver {
    /// Create a resolver from the current XDG environment
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::NoHomeDirectory`] if an XDG variable is unset
    /// and the home directory cannot be determined.
    pub fn new() -> Result<Self, WidgetError> {
        Ok(Self {
            config_dir: Self::resolve_base("XDG_CONFIG_HOME", ".config")?,
            cache_dir: Self::resolve_base("XDG_CACHE_HOME", ".cache")?,
        })
    }

    /// Create a resolver over explicit customization and defaults directories
    #[must_use]
    pub fn with_dirs(config_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Directory holding user customizations
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Directory holding installed defaults
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Whether a template is overridden by the user
    #[must_use]
    pub fn is_customized(&self, relative: &str) -> bool {
        join_logical(&self.config_dir, relative).exists()
    }

    fn resolve_base(var: &str, home_subdir: &str) -> Result<PathBuf, WidgetError> {
        let base = if let Ok(xdg) = std::env::var(var) {
            PathBuf::from(xdg)
        } else {
            dirs::home_dir()
                .ok_or(WidgetError::NoHomeDirectory)?
                .join(home_subdir)
        };

        Ok(base.join("form-widgets").join("templates"))
    }
}

impl PathResolver for XdgResolver {
    fn resolve(&self, relative: &str) -> PathBuf {
        let custom = join_logical(&self.config_dir, relative);
        if custom.exists() {
            return custom;
        }

        join_logical(&self.cache_dir, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_base_dir_joins_segments() {
        let resolver = BaseDirResolver::new("/srv/templates");
        assert_eq!(
            resolver.resolve("bootstrap3/generic.tmpl"),
            Path::new("/srv/templates").join("bootstrap3").join("generic.tmpl")
        );
    }

    #[test]
    fn test_base_dir_ignores_empty_segments() {
        let resolver = BaseDirResolver::new("root");
        assert_eq!(
            resolver.resolve("/text//textinput.html"),
            Path::new("root").join("text").join("textinput.html")
        );
    }

    #[test]
    fn test_xdg_prefers_customization() {
        let config = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        fs::create_dir_all(config.path().join("options")).unwrap();
        fs::write(config.path().join("options/checkbox.html"), "custom").unwrap();

        let resolver = XdgResolver::with_dirs(config.path(), cache.path());

        assert_eq!(
            resolver.resolve("options/checkbox.html"),
            config.path().join("options").join("checkbox.html")
        );
        assert!(resolver.is_customized("options/checkbox.html"));
    }

    #[test]
    fn test_xdg_falls_back_to_cache() {
        let config = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        let resolver = XdgResolver::with_dirs(config.path(), cache.path());

        assert_eq!(
            resolver.resolve("static.html"),
            cache.path().join("static.html")
        );
        assert!(!resolver.is_customized("static.html"));
    }

    #[test]
    fn test_xdg_dirs_are_namespaced() {
        figment::Jail::expect_with(|jail| {
            let root = jail.directory().to_path_buf();
            jail.set_env("XDG_CONFIG_HOME", root.join("config").display());
            jail.set_env("XDG_CACHE_HOME", root.join("cache").display());

            let resolver = XdgResolver::new().map_err(|e| e.to_string())?;
            assert_eq!(
                resolver.config_dir(),
                root.join("config").join("form-widgets").join("templates")
            );
            assert_eq!(
                resolver.cache_dir(),
                root.join("cache").join("form-widgets").join("templates")
            );
            Ok(())
        });
    }
}
