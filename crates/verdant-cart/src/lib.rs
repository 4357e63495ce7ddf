//! Shopping-cart state management for the Verdant plant store.
//!
//! A single in-memory [`CartStore`] holds an ordered sequence of entries,
//! one per product name, and exposes three mutating operations: add item,
//! remove item, update quantity. The store is a plain owned value meant to
//! live inside a host application's state container; it does no I/O, holds
//! no locks, and never raises an error to the caller. Invalid payloads
//! degrade to a logged no-op and every operation reports what it did through
//! an [`Outcome`].
//!
//! Totals, item counts, and rendering are deliberately left to consumers
//! reading [`CartStore::entries`].
//!
//! # Example
//!
//! ```rust
//! use verdant_cart::prelude::*;
//!
//! let mut cart = CartStore::new();
//! cart.add_item(Item::new("Fern", 12).with_detail("image", "fern.png"));
//! cart.add_item(Item::new("Fern", 12));
//!
//! assert_eq!(cart.get(&ItemName::new("Fern")).map(|e| e.quantity), Some(2));
//!
//! cart.update_quantity(QuantityUpdate::new("Fern", 5));
//! cart.remove_item("Fern");
//! assert!(cart.is_empty());
//! ```

pub mod action;
pub mod cart;
pub mod error;
pub mod ids;

pub use action::{CartAction, QuantityUpdate, RemoveTarget};
pub use cart::{CartEntry, CartStore, Item, Outcome};
pub use error::CartError;
pub use ids::ItemName;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::action::{CartAction, QuantityUpdate, RemoveTarget};
    pub use crate::cart::{CartEntry, CartStore, Item, Outcome};
    pub use crate::error::CartError;
    pub use crate::ids::ItemName;
}
