//! Shell layout derivation
//!
//! Presentation flags never touch the workspace model; they only decide
//! which chrome is drawn around it.

use serde::Serialize;

use crate::config::{Platform, ShellConfig};
use crate::snapshot::AppSnapshot;

/// Top padding of the workspace list, in theme spacing units, when the
/// traffic-light buttons overlap the sidebar.
pub const MAC_SIDEBAR_TOP_PADDING: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellLayout {
    pub show_title_bar: bool,
    pub navigation_bar: bool,
    pub sidebar: Option<SidebarLayout>,
    pub overlay: ContentOverlay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLayout {
    /// Drop the top padding (full screen, fake title bar, or menubar popover)
    pub compact_top: bool,
    pub top_padding: u8,
    /// macOS keeps its own overlay scrollbar
    pub native_scrollbar: bool,
    pub footer: Option<SidebarFooter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarFooter {
    pub notifications_paused: bool,
    pub show_preferences: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentOverlay {
    None,
    Loading,
    FailedToLoad {
        hints: Vec<&'static str>,
        reload_shortcut: &'static str,
    },
}

const LOAD_FAILURE_HINTS: [&str; 3] = [
    "Checking the network cables, modem, and router.",
    "Checking the proxy and the firewall.",
    "Reconnecting to Wi-Fi.",
];

impl ContentOverlay {
    fn resolve(config: &ShellConfig, snapshot: &AppSnapshot) -> Self {
        let general = &snapshot.general;
        if general.is_loading {
            ContentOverlay::Loading
        } else if general.did_fail_load {
            ContentOverlay::FailedToLoad {
                hints: LOAD_FAILURE_HINTS.to_vec(),
                reload_shortcut: reload_shortcut(config.platform),
            }
        } else {
            ContentOverlay::None
        }
    }
}

pub fn reload_shortcut(platform: Platform) -> &'static str {
    if platform.is_mac() {
        "⌘ + R"
    } else {
        "Ctrl + R"
    }
}

impl ShellLayout {
    pub fn resolve(config: &ShellConfig, snapshot: &AppSnapshot) -> Self {
        let prefs = &snapshot.preferences;

        let show_title_bar = config.platform.is_mac() && prefs.title_bar;
        let navigation_bar = (config.platform == Platform::Linux
            && prefs.attach_to_menubar
            && !prefs.sidebar)
            || prefs.navigation_bar;

        let sidebar = prefs.sidebar.then(|| {
            let compact_top =
                snapshot.general.is_full_screen || show_title_bar || config.is_menubar();
            let top_padding = if config.platform.is_mac() && !compact_top {
                MAC_SIDEBAR_TOP_PADDING
            } else {
                0
            };
            let footer = (!navigation_bar).then(|| SidebarFooter {
                notifications_paused: snapshot.notifications_paused(),
                show_preferences: config.is_menubar(),
            });

            SidebarLayout {
                compact_top,
                top_padding,
                native_scrollbar: config.platform.is_mac(),
                footer,
            }
        });

        Self {
            show_title_bar,
            navigation_bar,
            sidebar,
            overlay: ContentOverlay::resolve(config, snapshot),
        }
    }
}
