//! form-widgets: style-aware HTML form widgets over composed templates
//!
//! Given a visual style (classic markup, Bootstrap 3, or a custom skin) and a
//! logical input type, the crate selects an ordered set of template
//! fragments, composes them into one minijinja unit, and hands back a
//! [`Widget`](widgets::Widget) that renders caller data to HTML.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use form_widgets::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     form_widgets::observability::init()?;
//!
//!     let config = WidgetConfig::load_for_service("my-app")?;
//!     catalog::install(&config.templates.base_dir, false)?;
//!
//!     let factory = WidgetFactory::from_config(&config);
//!     let email = factory.create(&config.templates.style()?, InputType::Email)?;
//!
//!     let html = email.render(&minijinja::context! {
//!         name => "email",
//!         label => "Email address",
//!         value => "a@b.com",
//!     })?;
//!     println!("{html}");
//!
//!     Ok(())
//! }
//! ```
//!
//! Widgets are built once, at startup, and rendered many times. A build
//! error means the template catalog is broken and should stop the
//! application.

pub mod config;
pub mod error;
pub mod observability;
pub mod widgets;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use form_widgets::prelude::*;
    //! ```

    pub use crate::config::{TemplateSettings, WidgetConfig};
    pub use crate::error::WidgetError;
    pub use crate::widgets::{
        catalog, BaseDirResolver, InputType, PathResolver, RenderWidget, Style, Widget,
        WidgetFactory, XdgResolver,
    };

    pub use minijinja;
}
