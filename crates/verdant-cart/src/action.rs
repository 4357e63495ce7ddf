//! Dispatchable cart actions and their payloads.
//!
//! Hosts that route named operations (rather than calling the store's
//! methods directly) deserialize a [`CartAction`] and hand it to
//! [`CartStore::dispatch`]. The wire shape is the conventional
//! `{"type": ..., "payload": ...}` envelope.
//!
//! [`CartStore::dispatch`]: crate::cart::CartStore::dispatch

use crate::cart::Item;
use crate::ids::ItemName;
use serde::{Deserialize, Serialize};

/// Target of a remove: a bare name, or any record exposing a `name` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemoveTarget {
    /// Plain name string.
    Name(ItemName),
    /// A record with a `name` field; other fields are ignored.
    Record {
        /// The name the record resolves to.
        #[serde(default)]
        name: ItemName,
    },
}

impl RemoveTarget {
    /// The name this target resolves to.
    pub fn name(&self) -> &ItemName {
        match self {
            RemoveTarget::Name(name) => name,
            RemoveTarget::Record { name } => name,
        }
    }
}

impl From<ItemName> for RemoveTarget {
    fn from(name: ItemName) -> Self {
        RemoveTarget::Name(name)
    }
}

impl From<String> for RemoveTarget {
    fn from(name: String) -> Self {
        RemoveTarget::Name(ItemName::new(name))
    }
}

impl From<&str> for RemoveTarget {
    fn from(name: &str) -> Self {
        RemoveTarget::Name(ItemName::new(name))
    }
}

impl From<&Item> for RemoveTarget {
    fn from(item: &Item) -> Self {
        RemoveTarget::Name(item.name.clone())
    }
}

/// Absolute quantity assignment for one entry.
///
/// `quantity` is a JSON number on the wire. A string quantity, numeric or
/// not, fails to deserialize, so a malformed payload never reaches the
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    /// Name of the entry to update.
    #[serde(default)]
    pub name: ItemName,
    /// The new quantity. `<= 0` removes the entry.
    pub quantity: i64,
}

impl QuantityUpdate {
    /// Create a quantity update.
    pub fn new(name: impl Into<ItemName>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A named cart operation with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum CartAction {
    /// Insert the item, or bump its quantity when already present.
    AddItem(Item),
    /// Drop the named entry from the cart.
    RemoveItem(RemoveTarget),
    /// Overwrite an entry's quantity; `<= 0` drops the entry.
    UpdateQuantity(QuantityUpdate),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_action_wire_shape() {
        let action: CartAction = serde_json::from_value(json!({
            "type": "addItem",
            "payload": { "name": "Fern", "cost": 12, "image": "fern.png" }
        }))
        .unwrap();

        match action {
            CartAction::AddItem(item) => {
                assert_eq!(item.name, "Fern");
                assert_eq!(item.details["image"], "fern.png");
            }
            other => panic!("expected AddItem, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_target_accepts_bare_name() {
        let action: CartAction = serde_json::from_value(json!({
            "type": "removeItem",
            "payload": "Fern"
        }))
        .unwrap();

        assert_eq!(
            action,
            CartAction::RemoveItem(RemoveTarget::Name(ItemName::new("Fern")))
        );
    }

    #[test]
    fn test_remove_target_accepts_record() {
        let action: CartAction = serde_json::from_value(json!({
            "type": "removeItem",
            "payload": { "name": "Fern", "cost": 12 }
        }))
        .unwrap();

        match action {
            CartAction::RemoveItem(target) => assert_eq!(target.name().as_str(), "Fern"),
            other => panic!("expected RemoveItem, got {:?}", other),
        }
    }

    #[test]
    fn test_update_quantity_rejects_string_quantity() {
        let result = serde_json::from_value::<CartAction>(json!({
            "type": "updateQuantity",
            "payload": { "name": "Fern", "quantity": "3" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_action_round_trip() {
        let action = CartAction::UpdateQuantity(QuantityUpdate::new("Fern", 3));
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "updateQuantity",
                "payload": { "name": "Fern", "quantity": 3 }
            })
        );

        let parsed: CartAction = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, action);
    }
}
