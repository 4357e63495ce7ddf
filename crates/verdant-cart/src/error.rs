//! Cart rejection reasons.

use crate::ids::ItemName;
use thiserror::Error;

/// Why a cart operation refused a payload.
///
/// Never raised: values travel inside [`Outcome::Rejected`] so a single bad
/// dispatch cannot break the host application. The `Display` text is the
/// human-readable diagnostic emitted on the log channel.
///
/// [`Outcome::Rejected`]: crate::cart::Outcome::Rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Payload carried no usable name.
    #[error("item payload is missing a name")]
    MissingName,

    /// Add-item payload without a present cost marker.
    #[error("item \"{name}\" has no cost")]
    MissingCost {
        /// Name of the item that was refused.
        name: ItemName,
    },

    /// Quantity update referenced an entry that is not in the cart.
    #[error("item \"{name}\" not found in cart")]
    NotInCart {
        /// Name the update asked for.
        name: ItemName,
    },
}
