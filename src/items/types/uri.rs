use super::{or_not_configured, read_data, DEFAULT_ICON_THEME};
use crate::items::{ItemType, MenuItem};
use serde::{Deserialize, Serialize};

/// Payload of a `uri` item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UriData {
    pub uri: String,
}

pub struct UriItemType;

impl ItemType for UriItemType {
    fn has_children(&self) -> bool {
        false
    }

    fn default_name(&self) -> &str {
        "Open URI"
    }

    fn default_icon(&self) -> &str {
        "public"
    }

    fn default_icon_theme(&self) -> &str {
        DEFAULT_ICON_THEME
    }

    fn default_data(&self) -> serde_json::Value {
        serde_json::json!({ "uri": "" })
    }

    fn generic_description(&self) -> &str {
        "Opens files or websites."
    }

    fn describe(&self, item: &MenuItem) -> String {
        let data: UriData = read_data(&item.data);
        or_not_configured(&data.uri)
    }
}
