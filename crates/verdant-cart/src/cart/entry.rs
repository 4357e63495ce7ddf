//! Cart entries and the incoming item record.

use crate::ids::ItemName;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An item supplied to [`CartStore::add_item`].
///
/// `name` and `cost` are the only fields this crate interprets. Everything
/// else on the record (image, description, ...) lands in `details` and is
/// copied onto the entry verbatim.
///
/// [`CartStore::add_item`]: crate::cart::CartStore::add_item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Product name, the identity key within the cart.
    #[serde(default)]
    pub name: ItemName,
    /// Opaque price marker, numeric or textual. Never parsed; only checked
    /// for presence.
    #[serde(default)]
    pub cost: Value,
    /// Descriptive fields carried through untouched.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Item {
    /// Create an item with a name and cost.
    pub fn new(name: impl Into<ItemName>, cost: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            cost: cost.into(),
            details: Map::new(),
        }
    }

    /// Attach a descriptive field (image, description, ...).
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// True when the cost marker is present: not null, not `false`, not
    /// numeric zero, not the empty string.
    pub fn has_cost(&self) -> bool {
        match &self.cost {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// One distinct product line in the cart.
///
/// Serializes flat: the item's fields plus `quantity`, so hosts see the same
/// shape they supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product name; unique within the cart.
    pub name: ItemName,
    /// Price marker copied from the item at insertion.
    pub cost: Value,
    /// Descriptive fields copied verbatim at insertion.
    #[serde(flatten)]
    pub details: Map<String, Value>,
    /// Always `>= 1` while the entry is in the cart.
    pub quantity: i64,
}

impl CartEntry {
    /// Build the entry for a newly added item, quantity 1.
    ///
    /// The cart owns `quantity`: an inbound field of that name on the item's
    /// details is dropped rather than carried through.
    pub(crate) fn from_item(mut item: Item) -> Self {
        item.details.remove("quantity");
        Self {
            name: item.name,
            cost: item.cost,
            details: item.details,
            quantity: 1,
        }
    }
}
