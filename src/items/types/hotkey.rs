use super::{or_not_configured, read_data, DEFAULT_ICON_THEME};
use crate::items::{ItemType, MenuItem};
use serde::{Deserialize, Serialize};

/// Payload of a `hotkey` item. `hotkey` is a key chord such as `ctrl+alt+t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyData {
    pub hotkey: String,
    pub delayed: bool,
}

impl Default for HotkeyData {
    fn default() -> Self {
        Self {
            hotkey: String::new(),
            delayed: true,
        }
    }
}

pub struct HotkeyItemType;

impl ItemType for HotkeyItemType {
    fn has_children(&self) -> bool {
        false
    }

    fn default_name(&self) -> &str {
        "Simulate Hotkey"
    }

    fn default_icon(&self) -> &str {
        "keyboard"
    }

    fn default_icon_theme(&self) -> &str {
        DEFAULT_ICON_THEME
    }

    fn default_data(&self) -> serde_json::Value {
        serde_json::json!({ "hotkey": "", "delayed": true })
    }

    fn generic_description(&self) -> &str {
        "Simulates a keyboard shortcut."
    }

    fn describe(&self, item: &MenuItem) -> String {
        let data: HotkeyData = read_data(&item.data);
        or_not_configured(&data.hotkey)
    }
}
