//! Main application component with routing

use std::rc::Rc;

use dioxus::history::{provide_history_context, MemoryHistory};
use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::router::{HistoryMode, SiteRouter};
use crate::routes::Route;
use crate::styles::CUSTOM_STYLES;

/// Site name shown in the header and the document title
#[derive(Clone, Debug, PartialEq)]
pub struct SiteTitle(pub String);

impl Default for SiteTitle {
    fn default() -> Self {
        Self("Folio".to_string())
    }
}

/// Main application component
///
/// Expects a [`SiteRouter`] in the launch context and optionally a
/// [`SiteTitle`].
#[component]
pub fn App() -> Element {
    let router = use_context::<SiteRouter>();

    use_hook(move || {
        info!(history = ?router.history(), "mounting router");
        if router.history() == HistoryMode::Memory {
            let history = match router.initial_path() {
                Some(path) => MemoryHistory::with_initial_path(path),
                None => MemoryHistory::default(),
            };
            provide_history_context(Rc::new(history));
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Layout component wrapping all routes
#[component]
pub fn Layout() -> Element {
    let route: Route = use_route();
    let SiteTitle(title) = try_use_context::<SiteTitle>().unwrap_or_default();
    debug!(%route, name = route.name(), "rendering route");

    rsx! {
        document::Title { "{route.name()} | {title}" }
        style { {CUSTOM_STYLES} }

        div {
            class: "main-container",

            header { class: "site-header",
                Link { to: Route::Home {}, class: "site-title", "{title}" }

                nav { class: "tab-bar",
                    for item in Route::navigation() {
                        Link {
                            key: "{item.name()}",
                            class: if item == route { "tab-item tab-active" } else { "tab-item" },
                            to: item.clone(),
                            "{item.name()}"
                        }
                    }
                }
            }

            // Content Area with Router Outlet
            main { class: "content-area",
                Outlet::<Route> {}
            }
        }
    }
}
