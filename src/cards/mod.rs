//! Cards: identifiers, per-card state, and the symbol palette.
//!
//! ## Key Types
//!
//! - `CardId`: string identifier, `"{pair}a"` / `"{pair}b"`
//! - `Card`: content plus face-up / seen / matched flags
//! - `palette`: the fixed emoji set used as card content

pub mod card;
pub mod palette;

pub use card::{Card, CardId};
