//! Logging setup
//!
//! Events are emitted under `form_widgets::*` targets:
//!
//! | Level | Message | Fields |
//! |-------|---------|--------|
//! | debug | `Composed widget template` | `fragments`, `entry` |
//! | debug | `Created widget` | `style`, `input_type`, `fragments` |
//! | debug | `Installed default templates` | `dir`, `written` |
//! | debug | `Keeping existing template` | `template` |
//! | warn | `Widget render failed` | `style`, `input_type`, `error` |
//!
//! Widget construction is a startup activity, so the debug events are quiet
//! once an application is serving. Only [`Widget::render_lossy`] logs on the
//! render path, because it swallows the error it reports.
//!
//! Applications with their own subscriber need nothing from this module.
//! Standalone tools and tests can call [`init`].
//!
//! [`Widget::render_lossy`]: crate::widgets::Widget::render_lossy

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `tracing` subscriber
///
/// Honors `RUST_LOG`. Without it, debug builds show this crate's debug
/// events next to `info` from everything else, pretty printed. Release
/// builds keep `info` and above as JSON, which leaves only render warnings
/// from this crate. Use `RUST_LOG=form_widgets=debug` to trace which
/// fragments a widget was built from.
///
/// # Example
///
/// ```rust,no_run
/// form_widgets::observability::init()?;
/// tracing::info!("Widgets ready");
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            EnvFilter::new("info,form_widgets=debug")
        } else {
            EnvFilter::new("info")
        }
    });

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    }

    Ok(())
}
