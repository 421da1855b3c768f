//! Dataset the in-memory stores are seeded with at startup.

mod dishes;
mod orders;

pub use dishes::dishes;
pub use orders::orders;
