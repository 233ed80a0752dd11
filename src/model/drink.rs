use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MenuEntry;

/// A drink on the menu.
///
/// Carries the common item attributes (name, price) plus the serving size. Implements
/// [`MenuEntry`], so it can be wrapped in a [`MenuItem`](super::MenuItem) and handed to a
/// [`Restaurant`](crate::restaurant::Restaurant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    name: String,
    price: f64,
    size: String,
}

impl Drink {
    /// Fraction taken off the current price by one discount application.
    pub const DISCOUNT_RATE: f64 = 0.10;

    /// Creates a new Drink instance.
    ///
    /// # Arguments
    /// * `name` - Item name
    /// * `price` - Current price; not validated, zero and negative values are accepted
    /// * `size` - Free-form serving size (e.g. "grande")
    pub fn new(name: impl Into<String>, price: f64, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            size: size.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    /// Price after one more discount application, without mutating the item.
    pub fn discounted_price(&self) -> f64 {
        self.price - self.price * Self::DISCOUNT_RATE
    }
}

impl MenuEntry for Drink {
    fn apply_discount(&mut self) {
        let before = self.price;
        self.price = self.discounted_price();
        debug!(item = %self.name, before, after = self.price, "applied drink discount");
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Price: {:.2} | Size: {}",
            self.name, self.price, self.size
        )
    }
}
