//! Root Dioxus application component
//!
//! The shell around the saved views: it owns the selected view, the badge
//! counts and the last forwarded role filter, which is everything a user
//! directory screen would pass to its query layer.

use crate::storage::settings::{load_settings, WorkstationSettings};
use crate::types::view::{RoleFilter, ViewChange, ViewCounts};
use crate::ui::Layout;
use dioxus::prelude::*;

/// Shared state for the workstation screen
#[derive(Clone, Copy)]
pub struct AppState {
    pub active_view: Signal<String>,
    pub role_filter: Signal<Option<RoleFilter>>,
    pub view_counts: Signal<ViewCounts>,
    pub settings: Signal<WorkstationSettings>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        tracing::info!("AppState initialized");
        Self {
            active_view: Signal::new("all".to_string()),
            role_filter: Signal::new(None),
            view_counts: Signal::new(settings.view_counts.clone()),
            settings: Signal::new(settings),
        }
    }

    /// Apply a selection reported by the saved views
    pub fn select_view(&mut self, change: ViewChange) {
        tracing::info!(
            "Switching to view '{}' (role filter: {})",
            change.name,
            change.role_filter.map(|filter| filter.as_str()).unwrap_or("none")
        );
        self.active_view.set(change.name.as_str().to_string());
        self.role_filter.set(change.role_filter);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
