//! UI components for the user workstation
//!
//! This module contains all user interface components built with Dioxus.

pub mod components;
pub mod workstation;

use crate::app::AppState;
use crate::storage::settings::save_settings;
use crate::types::view::ViewChange;
use crate::ui::workstation::SavedViewsButtons;
use dioxus::prelude::*;

/// Main Application Layout
#[component]
pub fn Layout() -> Element {
    let mut app_state = use_context::<AppState>();
    let mut settings = app_state.settings;
    let theme = settings.read().theme.clone();
    let active_view = app_state.active_view.read().clone();
    let view_counts = app_state.view_counts.read().clone();
    let role_filter = app_state
        .role_filter
        .cloned()
        .map(|filter| filter.as_str())
        .unwrap_or("none");

    rsx! {
        // Theme wrapper
        div {
            "data-theme": "{theme}",
            class: "flex h-screen w-screen bg-[var(--bg-main)] text-[var(--text-primary)] overflow-hidden font-sans",

            link { rel: "stylesheet", href: "assets/workstation.css" }

            // Sidebar
            aside {
                class: "flex flex-col w-[260px] h-full bg-[var(--bg-sidebar)] border-r border-[var(--border-subtle)]",

                SavedViewsButtons {
                    active_view: active_view.clone(),
                    view_counts,
                    class: "p-3".to_string(),
                    on_view_change: move |change: ViewChange| app_state.select_view(change),
                }
            }

            // Main Content Area
            main {
                class: "flex-1 flex flex-col h-full relative min-w-0 p-8",

                // Theme Toggle
                div {
                    class: "absolute top-4 right-4",
                    button {
                        r#type: "button",
                        class: "p-2 rounded-full hover:bg-[var(--bg-hover)] text-[var(--text-tertiary)]",
                        title: "Toggle Theme",
                        onclick: move |_| {
                            let mut settings = settings.write();
                            let next = if settings.theme == "dark" { "light" } else { "dark" };
                            settings.theme = next.to_string();
                            if let Err(error) = save_settings(&settings) {
                                tracing::error!("Failed to save settings: {}", error);
                            }
                        },
                        "Theme"
                    }
                }

                // Current view and the role filter the directory query would use
                h1 { class: "text-2xl font-semibold mb-2", "User Directory" }
                p {
                    class: "text-sm text-[var(--text-secondary)]",
                    "data-testid": "active-view-summary",
                    "View: {active_view} · role filter: {role_filter}"
                }
            }
        }
    }
}
