use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemTypeError {
    /// No item type is registered under this name.
    #[error("Unknown menu item type: {0}")]
    UnknownType(String),
    /// An item type with this name was already registered.
    #[error("Menu item type registered twice: {0}")]
    DuplicateType(String),
    /// Items of this type cannot hold children.
    #[error("Menu item type cannot hold children: {0}")]
    NotAContainer(String),
}
