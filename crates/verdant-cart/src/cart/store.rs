//! The cart store and its mutating operations.

use crate::action::{CartAction, QuantityUpdate, RemoveTarget};
use crate::cart::entry::{CartEntry, Item};
use crate::error::CartError;
use crate::ids::ItemName;
use serde::{Deserialize, Serialize};

/// What a cart operation did to the sequence.
///
/// Operations report their effect instead of raising errors; callers that
/// want strict behavior inspect the value, everyone else can ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// New entry appended with quantity 1.
    Added,
    /// Existing entry bumped by one; carries the resulting quantity.
    Incremented(i64),
    /// Entry quantity overwritten with the given value.
    QuantitySet(i64),
    /// Entry dropped from the sequence.
    Removed,
    /// Nothing matched; sequence untouched.
    Unchanged,
    /// Payload refused; sequence untouched, diagnostic emitted.
    Rejected(CartError),
}

impl Outcome {
    /// True when the operation mutated the sequence.
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Unchanged | Outcome::Rejected(_))
    }
}

/// The shopping cart: an ordered sequence of entries, one per product name.
///
/// Owned by the host application's state container and mutated only through
/// the operations here. Entries keep insertion order; removal never reorders
/// the survivors. Every operation runs to completion, never panics on caller
/// input, and degrades invalid payloads to a logged no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartStore {
    items: Vec<CartEntry>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The full sequence, in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.items
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &ItemName) -> Option<&CartEntry> {
        self.items.iter().find(|e| &e.name == name)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the cart holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item, or bump its quantity by one when the name is already
    /// present.
    ///
    /// A payload without a name or without a present cost is refused: the
    /// sequence is left untouched and a diagnostic is logged. Afterwards
    /// exactly one entry for the name exists.
    pub fn add_item(&mut self, item: Item) -> Outcome {
        if item.name.is_empty() {
            return self.reject(CartError::MissingName);
        }
        if !item.has_cost() {
            return self.reject(CartError::MissingCost { name: item.name });
        }

        if let Some(existing) = self.items.iter_mut().find(|e| e.name == item.name) {
            existing.quantity += 1;
            return Outcome::Incremented(existing.quantity);
        }

        self.items.push(CartEntry::from_item(item));
        Outcome::Added
    }

    /// Remove the named entry entirely.
    ///
    /// Accepts a bare name or a record exposing a `name` field. Removing a
    /// name that is not in the cart leaves the sequence untouched and logs
    /// nothing, so the operation is idempotent.
    pub fn remove_item(&mut self, target: impl Into<RemoveTarget>) -> Outcome {
        let target = target.into();
        let name = target.name();
        if name.is_empty() {
            return self.reject(CartError::MissingName);
        }

        let before = self.items.len();
        self.items.retain(|e| &e.name != name);
        if self.items.len() < before {
            Outcome::Removed
        } else {
            Outcome::Unchanged
        }
    }

    /// Overwrite an entry's quantity; `<= 0` removes the entry.
    ///
    /// Unlike [`add_item`](CartStore::add_item) this is an absolute set, not
    /// an increment. Updating a name that is not in the cart is a logged
    /// no-op.
    pub fn update_quantity(&mut self, update: QuantityUpdate) -> Outcome {
        if update.name.is_empty() {
            return self.reject(CartError::MissingName);
        }

        let idx = match self.items.iter().position(|e| e.name == update.name) {
            Some(idx) => idx,
            None => return self.reject(CartError::NotInCart { name: update.name }),
        };

        if update.quantity <= 0 {
            self.items.remove(idx);
            return Outcome::Removed;
        }

        self.items[idx].quantity = update.quantity;
        Outcome::QuantitySet(update.quantity)
    }

    /// Apply a dispatched action to the cart.
    pub fn dispatch(&mut self, action: CartAction) -> Outcome {
        match action {
            CartAction::AddItem(item) => self.add_item(item),
            CartAction::RemoveItem(target) => self.remove_item(target),
            CartAction::UpdateQuantity(update) => self.update_quantity(update),
        }
    }

    fn reject(&self, error: CartError) -> Outcome {
        tracing::warn!("cart operation rejected: {}", error);
        Outcome::Rejected(error)
    }
}
