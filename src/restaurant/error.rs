//! Error types for restaurant operations.

use thiserror::Error;

/// Errors that can occur while operating on a restaurant's menu.
///
/// Discount application and menu insertion are infallible; the only failure point is
/// pushing the rendered menu into an output stream.
#[derive(Debug, Error)]
pub enum RestaurantError {
    /// Writing the rendered menu to the output stream failed.
    #[error("Failed to render menu: {0}")]
    Render(#[from] std::io::Error),
}
