//! UI library for the Folio site
//! Route table, router handle and Dioxus components with custom CSS (offline)

mod components;
mod error;
mod router;
mod routes;
mod styles;
mod views;

pub use components::{App, Layout, SiteTitle};
pub use error::RouteTableError;
pub use router::{validate_table, HistoryMode, SiteRouter};
pub use routes::{Route, RouteDescriptor, Segment, ROUTE_TABLE};
pub use styles::CUSTOM_STYLES;
pub use views::*;
