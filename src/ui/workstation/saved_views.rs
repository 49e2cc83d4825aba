//! Saved views button group
//!
//! Quick filters for the admin user directory: all users, clients, team and
//! admins. The active view and the counts are owned by the caller; selecting a
//! view only reports `(name, role_filter)` back through `on_view_change`.

use crate::types::view::{view_descriptors, ViewChange, ViewCounts, ViewIcon};
use crate::ui::components::icons::ViewGlyph;
use dioxus::prelude::*;

/// Everything a single rendered button needs, computed without a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct SavedViewButtonModel {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: ViewIcon,
    pub title: &'static str,
    pub class: &'static str,
    pub active: bool,
    pub aria_label: String,
    pub test_id: String,
    pub badge: Option<String>,
    pub change: ViewChange,
}

/// Build the button models for the given props, in display order.
pub fn button_models(active_view: &str, view_counts: &ViewCounts) -> Vec<SavedViewButtonModel> {
    view_descriptors(view_counts)
        .iter()
        .map(|view| {
            let active = view.is_active(active_view);
            SavedViewButtonModel {
                key: view.name.as_str(),
                label: view.label,
                icon: view.icon,
                title: view.description,
                class: if active { "view-btn active" } else { "view-btn" },
                active,
                aria_label: view.aria_label(),
                test_id: format!("view-btn-{}", view.name),
                badge: view.badge(),
                change: view.change(),
            }
        })
        .collect()
}

/// Root container class with the caller's extra classes appended.
pub fn section_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("sidebar-section {}", extra),
        None => "sidebar-section".to_string(),
    }
}

/// Saved views button group
///
/// `active_view` is compared by exact string match and is not validated; a
/// name outside the known four leaves every button inactive.
#[component]
pub fn SavedViewsButtons(
    #[props(into, default = String::from("all"))] active_view: String,
    on_view_change: EventHandler<ViewChange>,
    #[props(default)] view_counts: ViewCounts,
    class: Option<String>,
) -> Element {
    let buttons = button_models(&active_view, &view_counts);
    let root_class = section_class(class.as_deref());

    rsx! {
        div {
            class: "{root_class}",
            "data-testid": "saved-views-section",

            // Header
            h3 { class: "sidebar-title", "Saved Views" }

            div {
                class: "sidebar-views-container",
                "data-testid": "saved-views-container",

                // One button per view
                for view in buttons {
                    button {
                        key: "{view.key}",
                        r#type: "button",
                        class: view.class,
                        title: view.title,
                        "aria-pressed": "{view.active}",
                        "aria-label": "{view.aria_label}",
                        "data-testid": "{view.test_id}",
                        onclick: move |_| {
                            tracing::debug!(
                                view = %view.change.name,
                                role_filter = ?view.change.role_filter,
                                "Saved view selected"
                            );
                            on_view_change.call(view.change);
                        },

                        // Icon + label
                        span {
                            class: "flex items-center gap-1",
                            ViewGlyph { icon: view.icon, size: 16 }
                            span { class: "text-xs font-medium", "{view.label}" }
                        }

                        // Count badge, hidden at zero
                        if let Some(badge) = view.badge.as_ref() {
                            span {
                                class: "text-xs font-semibold text-muted-foreground ml-auto",
                                "{badge}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::view::{RoleFilter, ViewName};
    use dioxus::dioxus_core::{ElementId, Mutation};
    use dioxus::html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };
    use std::any::Any;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    fn counts(entries: &[(&str, u32)]) -> ViewCounts {
        entries
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    fn active_keys(models: &[SavedViewButtonModel]) -> Vec<&'static str> {
        models
            .iter()
            .filter(|model| model.active)
            .map(|model| model.key)
            .collect()
    }

    #[test]
    fn test_one_button_per_view_in_order() {
        let models = button_models("all", &ViewCounts::new());
        let test_ids: Vec<&str> = models.iter().map(|model| model.test_id.as_str()).collect();
        assert_eq!(
            test_ids,
            vec![
                "view-btn-all",
                "view-btn-clients",
                "view-btn-team",
                "view-btn-admins"
            ]
        );
    }

    #[test]
    fn test_exactly_one_active_for_known_names() {
        for name in ["all", "clients", "team", "admins"] {
            let models = button_models(name, &ViewCounts::new());
            assert_eq!(active_keys(&models), vec![name]);
        }
    }

    #[test]
    fn test_no_active_for_unknown_names() {
        for name in ["", "ALL", "Team", "guests", "admins "] {
            let models = button_models(name, &ViewCounts::new());
            assert!(active_keys(&models).is_empty(), "{:?} matched a button", name);
            assert!(models.iter().all(|model| model.class == "view-btn"));
        }
    }

    #[test]
    fn test_active_button_class() {
        let models = button_models("clients", &ViewCounts::new());
        assert_eq!(models[0].class, "view-btn");
        assert_eq!(models[1].class, "view-btn active");
    }

    #[test]
    fn test_directory_example() {
        let models = button_models(
            "team",
            &counts(&[("all", 150), ("clients", 45), ("team", 100), ("admins", 5)]),
        );

        let badges: Vec<Option<&str>> = models.iter().map(|model| model.badge.as_deref()).collect();
        assert_eq!(badges, vec![Some("99+"), Some("45"), Some("99+"), Some("5")]);
        assert_eq!(active_keys(&models), vec!["team"]);
        assert_eq!(models[2].aria_label, "Team (100 users)");
    }

    #[test]
    fn test_zero_count_hides_badge() {
        let models = button_models("all", &counts(&[("clients", 0), ("team", 3)]));
        assert_eq!(models[0].badge, None);
        assert_eq!(models[1].badge, None);
        assert_eq!(models[2].badge.as_deref(), Some("3"));
        assert_eq!(models[1].aria_label, "Clients (0 users)");
    }

    #[test]
    fn test_selection_payloads() {
        let models = button_models("all", &ViewCounts::new());

        assert_eq!(models[0].change.name, ViewName::All);
        assert_eq!(models[0].change.role_filter, None);
        assert_eq!(models[2].change.name, ViewName::Team);
        assert_eq!(models[2].change.role_filter, Some(RoleFilter::Team));
    }

    #[test]
    fn test_titles_come_from_descriptions() {
        let models = button_models("all", &ViewCounts::new());
        assert_eq!(models[0].title, "View all users in the system");
        assert_eq!(
            models[2].title,
            "Internal team members (TEAM_MEMBER, TEAM_LEAD, STAFF)"
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let view_counts = counts(&[("all", 12), ("admins", 250)]);
        assert_eq!(
            button_models("admins", &view_counts),
            button_models("admins", &view_counts)
        );
    }

    #[test]
    fn test_section_class() {
        assert_eq!(section_class(None), "sidebar-section");
        assert_eq!(section_class(Some("")), "sidebar-section");
        assert_eq!(section_class(Some("  ")), "sidebar-section");
        assert_eq!(section_class(Some("mt-4 px-2")), "sidebar-section mt-4 px-2");
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// The markup of the button carrying `data-testid="view-btn-{name}"`
    fn button_html<'a>(html: &'a str, name: &str) -> &'a str {
        let test_id = format!(r#"data-testid="view-btn-{}""#, name);
        html.split("<button")
            .find(|chunk| chunk.contains(&test_id))
            .unwrap_or_else(|| panic!("no button rendered for {}", name))
    }

    #[component]
    fn DefaultViewHost() -> Element {
        rsx! {
            SavedViewsButtons {
                view_counts: counts(&[("all", 150), ("clients", 45), ("team", 100), ("admins", 0)]),
                on_view_change: move |_: ViewChange| {},
            }
        }
    }

    #[component]
    fn TeamViewHost() -> Element {
        rsx! {
            SavedViewsButtons {
                active_view: "team",
                view_counts: counts(&[("all", 150), ("clients", 45), ("team", 100), ("admins", 5)]),
                class: "p-3".to_string(),
                on_view_change: move |_: ViewChange| {},
            }
        }
    }

    #[test]
    fn test_rendered_defaults_to_all_view() {
        let html = render(DefaultViewHost);

        assert!(button_html(&html, "all").contains(r#"aria-pressed="true""#));
        assert!(button_html(&html, "all").contains(r#"class="view-btn active""#));
        for name in ["clients", "team", "admins"] {
            assert!(button_html(&html, name).contains(r#"aria-pressed="false""#));
        }
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
    }

    #[test]
    fn test_rendered_section_structure() {
        let html = render(DefaultViewHost);

        assert!(html.contains(r#"class="sidebar-section""#));
        assert!(html.contains(r#"data-testid="saved-views-section""#));
        assert!(html.contains(r#"data-testid="saved-views-container""#));
        assert!(html.contains(">Saved Views</h3>"));
        assert_eq!(html.matches("<button").count(), 4);
    }

    #[test]
    fn test_rendered_badges_and_labels() {
        let html = render(DefaultViewHost);

        assert!(button_html(&html, "all").contains(">99+<"));
        assert!(button_html(&html, "clients").contains(">45<"));
        assert!(button_html(&html, "team").contains(">99+<"));
        assert!(!button_html(&html, "admins").contains("ml-auto"));
        assert!(button_html(&html, "admins").contains(r#"aria-label="Admins (0 users)""#));
        assert!(button_html(&html, "all").contains(r#"title="View all users in the system""#));
    }

    #[test]
    fn test_rendered_active_view_and_extra_class() {
        let html = render(TeamViewHost);

        assert!(html.contains(r#"class="sidebar-section p-3""#));
        assert!(button_html(&html, "team").contains(r#"aria-pressed="true""#));
        assert!(button_html(&html, "all").contains(r#"aria-pressed="false""#));
        assert!(button_html(&html, "admins").contains(">5<"));
        assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
    }

    #[test]
    fn test_rendered_output_is_stable() {
        assert_eq!(render(TeamViewHost), render(TeamViewHost));
    }

    #[derive(Clone, Default)]
    struct Recorded(Arc<Mutex<Vec<ViewChange>>>);

    impl PartialEq for Recorded {
        fn eq(&self, other: &Self) -> bool {
            Arc::ptr_eq(&self.0, &other.0)
        }
    }

    #[component]
    fn RecordingHost(recorded: Recorded) -> Element {
        rsx! {
            SavedViewsButtons {
                on_view_change: move |change: ViewChange| recorded.0.lock().unwrap().push(change),
            }
        }
    }

    fn click_listeners(edits: &[Mutation]) -> Vec<ElementId> {
        edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_clicking_buttons_reports_selection() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let recorded = Recorded::default();
        let mut dom = VirtualDom::new_with_props(
            RecordingHost,
            RecordingHostProps {
                recorded: recorded.clone(),
            },
        );
        let mutations = dom.rebuild_to_vec();
        let listeners = click_listeners(&mutations.edits);
        assert_eq!(listeners.len(), 4);

        for id in [listeners[0], listeners[2]] {
            let event = Event::new(
                Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
                true,
            );
            dom.runtime().handle_event("click", event, id);
        }

        assert_eq!(
            *recorded.0.lock().unwrap(),
            vec![
                ViewChange {
                    name: ViewName::All,
                    role_filter: None
                },
                ViewChange {
                    name: ViewName::Team,
                    role_filter: Some(RoleFilter::Team)
                },
            ]
        );
    }
}
