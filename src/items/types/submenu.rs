use super::DEFAULT_ICON_THEME;
use crate::items::{ItemType, MenuItem};

pub struct SubmenuItemType;

impl ItemType for SubmenuItemType {
    fn has_children(&self) -> bool {
        true
    }

    fn default_name(&self) -> &str {
        "Submenu"
    }

    fn default_icon(&self) -> &str {
        "apps"
    }

    fn default_icon_theme(&self) -> &str {
        DEFAULT_ICON_THEME
    }

    fn default_data(&self) -> serde_json::Value {
        serde_json::json!({})
    }

    fn generic_description(&self) -> &str {
        "Contains other menu items."
    }

    fn describe(&self, item: &MenuItem) -> String {
        match item.children.as_ref().map_or(0, Vec::len) {
            1 => "Contains 1 item.".to_string(),
            n => format!("Contains {} items.", n),
        }
    }
}
