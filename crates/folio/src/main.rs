//! Folio
//! A content site built with Dioxus: home, about, work, tags, projects, people and news

mod config;

use anyhow::Context;
use dioxus::logger::tracing::{info, Level};
use ui::{App, SiteRouter, SiteTitle};

use crate::config::SiteConfig;

fn main() -> anyhow::Result<()> {
    dioxus::logger::init(Level::INFO).context("failed to initialise logger")?;

    let config = SiteConfig::default();
    let router = SiteRouter::init(config.history).context("invalid route table")?;
    info!(title = %config.title, "launching");

    launch(config, router);
    Ok(())
}

#[cfg(feature = "desktop")]
fn launch(config: SiteConfig, router: SiteRouter) {
    use dioxus::desktop::{LogicalSize, WindowBuilder};

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                WindowBuilder::new()
                    .with_title(config.title.clone())
                    .with_inner_size(LogicalSize::new(1100.0, 700.0))
                    .with_resizable(true),
            ),
        )
        .with_context(router)
        .with_context(SiteTitle(config.title))
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch(config: SiteConfig, router: SiteRouter) {
    dioxus::LaunchBuilder::web()
        .with_context(router)
        .with_context(SiteTitle(config.title))
        .launch(App);
}
