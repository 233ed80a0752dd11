#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Restaurant Menu
//!
//! > **A small menu-domain model: item variants, fixed-rate discounts, and a restaurant that
//! > owns the menu.**
//!
//! ## 🗺️ Module Tour
//!
//! - **[model]**: Pure data structures ([`Drink`](model::Drink), [`Dish`](model::Dish),
//!   [`Dessert`](model::Dessert)), the closed [`MenuItem`](model::MenuItem) sum type, and the
//!   shared [`MenuEntry`](model::MenuEntry) contract.
//! - **[restaurant]**: The [`Restaurant`](restaurant::Restaurant) container that owns the
//!   ordered menu and renders it to an output stream.
//! - **[runtime]**: Observability setup ([`setup_tracing`](runtime::setup_tracing)).
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use restaurant_menu::model::{Drink, MenuEntry};
//! use restaurant_menu::restaurant::Restaurant;
//!
//! let mut restaurant = Restaurant::new("praça", "Gourmet");
//!
//! let mut juice = Drink::new("Suco de Melancia", 5.0, "grande");
//! juice.apply_discount();
//!
//! restaurant.add_to_menu(juice);
//! assert_eq!(restaurant.menu().len(), 1);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Menu goes to stdout; lifecycle logs are opt-in
//! RUST_LOG=info cargo run
//! ```
//!
//! ## 📐 Design Notes
//!
//! - **Closed variant set**: the item kinds form a sum type. Each variant carries its own
//!   fields and its own `DISCOUNT_RATE` constant, so a rate change is a one-line edit on the
//!   variant that owns it.
//! - **Controlled mutation**: a price moves only through
//!   [`apply_discount`](model::MenuEntry::apply_discount), which routes through the pure
//!   `discounted_price` computation. Repeated application compounds the discount
//!   geometrically; that is documented behavior, covered by tests rather than guarded
//!   against.
//! - **Injectable output**: [`write_menu`](restaurant::Restaurant::write_menu) renders into
//!   any [`std::io::Write`], which is what the tests use;
//!   [`display_menu`](restaurant::Restaurant::display_menu) points it at stdout.

pub mod model;
pub mod restaurant;
pub mod runtime;
