use super::{or_not_configured, read_data, DEFAULT_ICON_THEME};
use crate::items::{ItemType, MenuItem};
use serde::{Deserialize, Serialize};

/// Payload of a `command` item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandData {
    pub command: String,
    /// Run the command only after the menu has faded out.
    pub delayed: bool,
}

pub struct CommandItemType;

impl ItemType for CommandItemType {
    fn has_children(&self) -> bool {
        false
    }

    fn default_name(&self) -> &str {
        "Launch Application"
    }

    fn default_icon(&self) -> &str {
        "terminal"
    }

    fn default_icon_theme(&self) -> &str {
        DEFAULT_ICON_THEME
    }

    fn default_data(&self) -> serde_json::Value {
        serde_json::json!({ "command": "", "delayed": false })
    }

    fn generic_description(&self) -> &str {
        "Runs any command. This can be used to start applications, open files, etc."
    }

    fn describe(&self, item: &MenuItem) -> String {
        let data: CommandData = read_data(&item.data);
        or_not_configured(&data.command)
    }
}
