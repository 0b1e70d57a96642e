//! Page components rendered by the router
//!
//! Content is placeholder copy; the pages only show which route rendered
//! and the parameters it received.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        h1 { class: "page-title", "Home" }
        p { class: "page-subtitle", "Selected work, people and news from the studio." }
        div { class: "page-body",
            Link { to: Route::Work {}, "See the work" }
        }
    }
}

#[component]
pub fn AboutView() -> Element {
    rsx! {
        h1 { class: "page-title", "About" }
        div { class: "page-body", "Who we are and how we work." }
    }
}

#[component]
pub fn WorkView() -> Element {
    rsx! {
        h1 { class: "page-title", "Work" }
        p { class: "page-subtitle", "Browse projects by tag." }
    }
}

/// Projects carrying a single tag
#[component]
pub fn TagView(tag_name: String) -> Element {
    rsx! {
        h1 { class: "page-title", "#{tag_name}" }
        p { class: "page-subtitle", "Projects tagged {tag_name}" }
        Link { to: Route::Work {}, "All work" }
    }
}

/// A single project page
#[component]
pub fn ProjectView(project_name: String) -> Element {
    rsx! {
        h1 { class: "page-title", "{project_name}" }
        div { class: "tag-list",
            Link {
                class: "tag-chip",
                to: Route::Work {},
                "Back to work"
            }
        }
    }
}

#[component]
pub fn PeopleView() -> Element {
    rsx! {
        h1 { class: "page-title", "People" }
        div { class: "page-body", "The team." }
    }
}

#[component]
pub fn NewsView() -> Element {
    rsx! {
        h1 { class: "page-title", "News" }
        div { class: "page-body", "Announcements and press." }
    }
}
