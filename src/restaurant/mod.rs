//! The restaurant container: a named, categorized, ordered collection of menu items.
//!
//! [`Restaurant`] takes ownership of every [`MenuItem`] handed to
//! [`add_to_menu`](Restaurant::add_to_menu) and renders the whole menu through
//! [`write_menu`](Restaurant::write_menu) (any writer, used by the tests) or
//! [`display_menu`](Restaurant::display_menu) (stdout).

pub mod error;

pub use error::*;

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::model::{MenuEntry, MenuItem};

/// A restaurant with a location, a category label, and an ordered menu.
///
/// The menu preserves insertion order, allows duplicates, and has no capacity limit.
/// Items are never removed once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    location: String,
    category: String,
    menu: Vec<MenuItem>,
}

impl Restaurant {
    /// Creates a new restaurant with an empty menu.
    ///
    /// # Arguments
    /// * `location` - Where the restaurant is (doubles as its display name)
    /// * `category` - Cuisine style label (e.g. "Gourmet")
    pub fn new(location: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            category: category.into(),
            menu: Vec::new(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The menu in insertion order.
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Appends an item to the end of the menu, taking ownership of it.
    ///
    /// No duplicate check: adding the same item twice lists it twice.
    #[instrument(skip(self, item), fields(restaurant = %self.location))]
    pub fn add_to_menu(&mut self, item: impl Into<MenuItem>) {
        let item = item.into();
        debug!(item = %item.name(), position = self.menu.len(), "added item to menu");
        self.menu.push(item);
    }

    /// Writes the menu to `out`: a header line, then one line per item in insertion
    /// order.
    pub fn write_menu(&self, out: &mut impl Write) -> Result<(), RestaurantError> {
        writeln!(out, "{} ({})", self.location, self.category)?;
        for item in &self.menu {
            writeln!(out, "{}", item.describe())?;
        }
        Ok(())
    }

    /// Prints the menu to standard output.
    #[instrument(skip(self), fields(restaurant = %self.location))]
    pub fn display_menu(&self) -> Result<(), RestaurantError> {
        debug!(items = self.menu.len(), "displaying menu");
        let stdout = io::stdout();
        self.write_menu(&mut stdout.lock())
    }
}
