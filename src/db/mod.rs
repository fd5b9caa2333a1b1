//! Data-access layer for Tandem.
//!
//! One module per feature table. Each function wraps one generic table
//! call (two for the documented read-modify-write cases) with a fixed
//! table name and shape, and returns typed rows. Errors propagate to
//! the calling screen untouched.

mod alarms;
mod anniversaries;
mod board;
mod budget;
mod cycles;
mod date_ideas;
mod gallery;
mod jokes;
mod locations;
mod moods;
mod pins;
mod profiles;
mod wishlist;

pub use alarms::*;
pub use anniversaries::*;
pub use board::*;
pub use budget::*;
pub use cycles::*;
pub use date_ideas::*;
pub use gallery::*;
pub use jokes::*;
pub use locations::*;
pub use moods::*;
pub use pins::*;
pub use profiles::*;
pub use wishlist::*;
