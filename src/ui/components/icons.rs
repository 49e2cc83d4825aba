//! Monochrome stroke icons for the saved views

use crate::types::view::ViewIcon;
use dioxus::prelude::*;

/// Renders the glyph for a view at the given pixel size, inheriting text color.
#[component]
pub fn ViewGlyph(icon: ViewIcon, #[props(default = 16)] size: u32) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",

            {match icon {
                ViewIcon::Users => rsx! {
                    path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
                    circle { cx: "9", cy: "7", r: "4" }
                    path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
                    path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
                },
                ViewIcon::Building => rsx! {
                    path { d: "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z" }
                    path { d: "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2" }
                    path { d: "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2" }
                    path { d: "M10 6h4M10 10h4M10 14h4M10 18h4" }
                },
                ViewIcon::UsersPair => rsx! {
                    path { d: "M14 19a6 6 0 0 0-12 0" }
                    circle { cx: "8", cy: "9", r: "4" }
                    path { d: "M22 19a6 6 0 0 0-6-6 4 4 0 1 0 0-8" }
                },
                ViewIcon::Shield => rsx! {
                    path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
                },
            }}
        }
    }
}
