//! Saved Views - admin user workstation
//!
//! Desktop shell hosting the saved views button group.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use saved_views::app::App;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("saved_views=info")))
        .init();

    info!("Starting Saved Views v{}", env!("CARGO_PKG_VERSION"));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::default().with_window(
                WindowBuilder::new()
                    .with_title("User Workstation")
                    .with_inner_size(LogicalSize::new(960.0, 640.0)),
            ),
        )
        .launch(App);
}
