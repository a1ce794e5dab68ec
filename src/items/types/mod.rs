pub mod command;
pub mod hotkey;
pub mod submenu;
pub mod uri;

pub use command::{CommandData, CommandItemType};
pub use hotkey::{HotkeyData, HotkeyItemType};
pub use submenu::SubmenuItemType;
pub use uri::{UriData, UriItemType};

use serde::de::DeserializeOwned;

pub const DEFAULT_ICON_THEME: &str = "material-symbols-rounded";

pub(crate) const NOT_CONFIGURED: &str = "Not configured.";

/// Reads a payload leniently: anything that does not fit `T` yields `T::default()`.
pub(crate) fn read_data<T: DeserializeOwned + Default>(data: &serde_json::Value) -> T {
    T::deserialize(data).unwrap_or_default()
}

pub(crate) fn or_not_configured(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_CONFIGURED.to_string()
    } else {
        value.to_string()
    }
}
