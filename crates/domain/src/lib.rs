#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod exercise;
mod id;
mod name;
mod rep_range;
mod strength;
mod superset;
mod tempo;
mod units;
mod workout;

pub use exercise::*;
pub use id::*;
pub use name::*;
pub use rep_range::*;
pub use strength::*;
pub use superset::*;
pub use tempo::*;
pub use units::*;
pub use workout::*;
