//! Pure data structures for the menu domain: the item variants, the closed
//! [`MenuItem`] sum type, and the shared [`MenuEntry`] contract.

pub mod dessert;
pub mod dish;
pub mod drink;
pub mod item;

pub use dessert::*;
pub use dish::*;
pub use drink::*;
pub use item::*;
