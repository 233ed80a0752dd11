use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MenuEntry;

/// A dessert on the menu.
///
/// Next to the common attributes it carries a category label (`kind`, serialized as
/// `type`), a serving size, and a description. Desserts take a steeper discount than the
/// other variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dessert {
    name: String,
    price: f64,
    #[serde(rename = "type")]
    kind: String,
    size: String,
    description: String,
}

impl Dessert {
    /// Fraction taken off the current price by one discount application.
    pub const DISCOUNT_RATE: f64 = 0.15;

    /// Creates a new Dessert instance.
    ///
    /// # Arguments
    /// * `name` - Item name
    /// * `price` - Current price; not validated
    /// * `kind` - Category label (e.g. "Doce")
    /// * `size` - Free-form serving size
    /// * `description` - Free-form description
    pub fn new(
        name: impl Into<String>,
        price: f64,
        kind: impl Into<String>,
        size: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            kind: kind.into(),
            size: size.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price after one more discount application, without mutating the item.
    pub fn discounted_price(&self) -> f64 {
        self.price - self.price * Self::DISCOUNT_RATE
    }
}

impl MenuEntry for Dessert {
    fn apply_discount(&mut self) {
        let before = self.price;
        self.price = self.discounted_price();
        debug!(item = %self.name, before, after = self.price, "applied dessert discount");
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Display for Dessert {
    // The variant owns its rendering: kind, size, and description, without the
    // name and price the other variants show.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {} | Size: {} | Description: {}",
            self.kind, self.size, self.description
        )
    }
}
