//! Shell components

mod app;

pub use app::{App, Layout, SiteTitle};
