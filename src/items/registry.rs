use super::{
    CommandItemType, HotkeyItemType, ItemType, ItemTypeError, MenuItem, SubmenuItemType,
    UriItemType,
};
use indexmap::map::Entry;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static SHARED: Lazy<ItemRegistry> = Lazy::new(ItemRegistry::with_builtins);

/// Lookup table from type name to [`ItemType`], in registration order.
///
/// Filled once at startup and only read afterwards. Components that need it
/// take a `&ItemRegistry`; [`ItemRegistry::shared`] hands out a process-wide
/// instance holding the built-in kinds.
pub struct ItemRegistry {
    types: IndexMap<String, Box<dyn ItemType>>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// A registry holding `command`, `hotkey`, `submenu` and `uri`, in that order.
    pub fn with_builtins() -> Self {
        let builtins: [(&str, Box<dyn ItemType>); 4] = [
            ("command", Box::new(CommandItemType)),
            ("hotkey", Box::new(HotkeyItemType)),
            ("submenu", Box::new(SubmenuItemType)),
            ("uri", Box::new(UriItemType)),
        ];

        let types: IndexMap<String, Box<dyn ItemType>> = builtins
            .into_iter()
            .map(|(name, item_type)| (name.to_string(), item_type))
            .collect();
        log::debug!("Registered built-in menu item types: {:?}", types.keys());
        Self { types }
    }

    pub fn shared() -> &'static ItemRegistry {
        &SHARED
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        item_type: Box<dyn ItemType>,
    ) -> Result<(), ItemTypeError> {
        match self.types.entry(name.into()) {
            Entry::Occupied(entry) => Err(ItemTypeError::DuplicateType(entry.key().clone())),
            Entry::Vacant(entry) => {
                log::debug!("Registered menu item type: {}", entry.key());
                entry.insert(item_type);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn ItemType> {
        self.types.get(name).map(|item_type| item_type.as_ref())
    }

    pub fn list_all(&self) -> Vec<(&str, &dyn ItemType)> {
        self.types
            .iter()
            .map(|(name, item_type)| (name.as_str(), item_type.as_ref()))
            .collect()
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Builds a new item of the named kind from that kind's defaults.
    ///
    /// Containers start with an empty `children` list, every other kind has
    /// none. Each call builds its own payload.
    pub fn create(&self, name: &str) -> Result<MenuItem, ItemTypeError> {
        let Some(item_type) = self.get(name) else {
            log::warn!("Refusing to create item of unknown type: {}", name);
            return Err(ItemTypeError::UnknownType(name.to_string()));
        };

        log::debug!("Creating menu item of type: {}", name);
        Ok(MenuItem {
            kind: name.to_string(),
            data: item_type.default_data(),
            name: item_type.default_name().to_string(),
            icon: item_type.default_icon().to_string(),
            icon_theme: item_type.default_icon_theme().to_string(),
            children: item_type.has_children().then(Vec::new),
            angle: None,
        })
    }

    /// Appends `child` to `parent` when the parent's kind is a container.
    ///
    /// A container read back without a `children` list gets one. On failure
    /// `parent` is left untouched and `child` is dropped.
    pub fn push_child(&self, parent: &mut MenuItem, child: MenuItem) -> Result<(), ItemTypeError> {
        let Some(item_type) = self.get(&parent.kind) else {
            return Err(ItemTypeError::UnknownType(parent.kind.clone()));
        };
        if !item_type.has_children() {
            log::warn!("Refusing to add a child to non-container item of type: {}", parent.kind);
            return Err(ItemTypeError::NotAContainer(parent.kind.clone()));
        }

        parent.children.get_or_insert_with(Vec::new).push(child);
        Ok(())
    }

    /// Describes `item` through the descriptor of its kind, `None` for unknown kinds.
    pub fn describe(&self, item: &MenuItem) -> Option<String> {
        self.get(&item.kind).map(|item_type| item_type.describe(item))
    }

    /// Whether every kind in the tree resolves and `children` is present
    /// exactly on containers. Payloads are not looked at.
    pub fn is_well_formed(&self, item: &MenuItem) -> bool {
        let Some(item_type) = self.get(&item.kind) else {
            return false;
        };

        match (&item.children, item_type.has_children()) {
            (Some(children), true) => children.iter().all(|child| self.is_well_formed(child)),
            (None, false) => true,
            _ => false,
        }
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
