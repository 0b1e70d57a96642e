//! Launch configuration

use ui::HistoryMode;

/// Settings the binary launches with
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub title: String,
    pub history: HistoryMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            history: platform_history(),
        }
    }
}

/// Desktop builds have no address bar, so they keep history in memory.
fn platform_history() -> HistoryMode {
    if cfg!(feature = "desktop") {
        HistoryMode::Memory
    } else {
        HistoryMode::Browser
    }
}
