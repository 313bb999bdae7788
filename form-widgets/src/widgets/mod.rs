//! Form widgets built from composed template fragments
//!
//! A widget is produced for a `(style, input type)` pair in five steps:
//!
//! 1. [`select_fragments`] picks the ordered fragments for the input type
//! 2. [`namespace`] turns each into a logical path for the style
//! 3. a [`PathResolver`] maps each path onto a file
//! 4. the [`TemplateComposer`] loads and chains the files under the entry point `main`
//! 5. the result is wrapped in a [`Widget`]
//!
//! [`WidgetFactory`] runs all five.
//!
//! # Example
//!
//! ```rust,no_run
//! use form_widgets::widgets::{catalog, BaseDirResolver, InputType, Style, WidgetFactory};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = std::path::Path::new("./templates");
//! catalog::install(dir, false)?;
//!
//! let factory = WidgetFactory::new(BaseDirResolver::new(dir));
//! let checkbox = factory.create(&Style::CLASSIC, InputType::Checkbox)?;
//!
//! let html = checkbox.render(&minijinja::context! {
//!     name => "remember",
//!     label => "Remember me",
//!     checked => true,
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
mod composer;
mod factory;
mod fragment;
mod input_type;
mod resolver;
mod style;
mod widget;

pub use crate::error::WidgetError;
pub use composer::{ComposedTemplate, ResolvedFragment, TemplateComposer, ENTRY_POINT};
pub use factory::WidgetFactory;
pub use fragment::{fragment_paths, namespace, select_fragments, Fragment};
pub use input_type::InputType;
pub use resolver::{BaseDirResolver, PathResolver, XdgResolver};
pub use style::Style;
pub use widget::{RenderWidget, Widget};
