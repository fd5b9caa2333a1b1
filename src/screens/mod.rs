//! Screen controllers.
//!
//! One controller per feature screen, holding the screen's local state:
//! the fetched rows, a loading flag, and at most one pending
//! user-facing notice. The shell renders the state and forwards user
//! actions. Every controller follows the same loop: `refresh()` on
//! mount, then data call + `refresh()` for each mutation. Errors never
//! propagate out of a controller; they become a notice and the action
//! is abandoned.

mod alarm;
mod anniversary;
mod board;
mod budget;
mod cycle;
mod date_ideas;
mod gallery;
mod joke;
mod location;
mod mood;
mod pin;
mod wishlist;

pub use alarm::AlarmScreen;
pub use anniversary::AnniversaryScreen;
pub use board::BoardScreen;
pub use budget::BudgetScreen;
pub use cycle::{CyclePrediction, CycleScreen};
pub use date_ideas::DateIdeasScreen;
pub use gallery::GalleryScreen;
pub use joke::JokeScreen;
pub use location::LocationScreen;
pub use mood::MoodScreen;
pub use pin::PinScreen;
pub use wishlist::WishlistScreen;

use tracing::error;

use crate::Error;

/// Log the failure, hand back the text the shell should alert with.
pub(crate) fn notice(message: &str, error: &Error) -> String {
    error!(%error, "{}", message);
    message.to_string()
}
