//! Shell configuration
//!
//! Platform and window mode are resolved once at startup and passed to
//! layout code, instead of being queried while rendering.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Accepts both Rust target names and host process names (`darwin`, `win32`)
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "macos" | "darwin" => Ok(Platform::MacOs),
            "windows" | "win32" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(CoreError::Config(format!("Unsupported platform: {}", other))),
        }
    }

    pub fn is_mac(&self) -> bool {
        matches!(self, Platform::MacOs)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// Regular application window
    #[default]
    Window,
    /// Popover attached to the system menu bar / tray
    Menubar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    pub platform: Platform,
    #[serde(default)]
    pub mode: WindowMode,
}

impl ShellConfig {
    pub fn new(platform: Platform, mode: WindowMode) -> Self {
        Self { platform, mode }
    }

    pub fn detect() -> Self {
        Self::new(Platform::current(), WindowMode::Window)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_menubar(&self) -> bool {
        self.mode == WindowMode::Menubar
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::detect()
    }
}
