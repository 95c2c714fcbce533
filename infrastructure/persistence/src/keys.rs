/// Well-known documents of a storefront session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageSlot {
    Users,
    CurrentUser,
    Cart,
    Orders,
    Favorites,
}

impl StorageSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageSlot::Users => "users",
            StorageSlot::CurrentUser => "currentUser",
            StorageSlot::Cart => "cart",
            StorageSlot::Orders => "orders",
            StorageSlot::Favorites => "favorites",
        }
    }
}

/// Builds namespaced keys so several storefronts can share one store.
#[derive(Debug, Clone)]
pub struct StorageKeys {
    namespace: String,
}

impl StorageKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into().trim().to_string(),
        }
    }

    pub fn key(&self, slot: StorageSlot) -> String {
        if self.namespace.is_empty() {
            slot.as_str().to_string()
        } else {
            format!("{}_{}", self.namespace, slot.as_str())
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new("ed")
    }
}
