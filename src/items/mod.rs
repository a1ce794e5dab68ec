pub mod error;
pub mod registry;
pub mod types;

pub use error::ItemTypeError;
pub use registry::ItemRegistry;
pub use types::{CommandData, CommandItemType, HotkeyData, HotkeyItemType, SubmenuItemType, UriData, UriItemType};

use serde::{Deserialize, Serialize};

/// Capabilities and defaults of one kind of menu item.
///
/// Implementations are stateless apart from what they fix at construction and
/// are registered once into an [`ItemRegistry`].
pub trait ItemType: Send + Sync {
    /// Whether items of this kind hold nested items.
    fn has_children(&self) -> bool;

    fn default_name(&self) -> &str;

    fn default_icon(&self) -> &str;

    fn default_icon_theme(&self) -> &str;

    /// A freshly built payload for a new item. Called once per created item.
    fn default_data(&self) -> serde_json::Value;

    /// Shown in the add-new-item chooser.
    fn generic_description(&self) -> &str;

    /// One-line summary of an existing item of this kind, shown below its name
    /// in trash and stash views. Must not panic on partial or mistyped data.
    fn describe(&self, item: &MenuItem) -> String;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
    pub name: String,
    pub icon: String,
    pub icon_theme: String,
    /// Only items whose [`ItemType::has_children`] is true carry a list. Add
    /// children through [`ItemRegistry::push_child`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_item(kind: &str) -> MenuItem {
        MenuItem {
            kind: kind.to_string(),
            data: json!({}),
            name: "Test".to_string(),
            icon: "apps".to_string(),
            icon_theme: "material-symbols-rounded".to_string(),
            children: None,
            angle: None,
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        // Arrange
        let item = make_item("command");

        // Act
        let value = serde_json::to_value(&item).unwrap();

        // Assert
        assert_eq!(value["type"], "command");
        assert_eq!(value["iconTheme"], "material-symbols-rounded");
        assert!(value.get("children").is_none());
        assert!(value.get("angle").is_none());
    }

    #[test]
    fn deserializes_nested_tree_with_angle() {
        // Arrange
        let raw = json!({
            "type": "submenu",
            "name": "Root",
            "icon": "apps",
            "iconTheme": "material-symbols-rounded",
            "children": [
                {
                    "type": "uri",
                    "data": {"uri": "https://example.com"},
                    "name": "Site",
                    "icon": "public",
                    "iconTheme": "material-symbols-rounded",
                    "angle": 90.0
                }
            ]
        });

        // Act
        let item: MenuItem = serde_json::from_value(raw).unwrap();

        // Assert
        assert_eq!(item.data, serde_json::Value::Null);
        let children = item.children.unwrap();
        assert_eq!(children[0].angle, Some(90.0));
        assert!(children[0].children.is_none());
    }
}
