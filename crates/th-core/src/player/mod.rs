//! Player system
//!
//! Contains the Hunter, the kit it carries, and the endings it can reach.

mod ending;
mod hunter;
mod kit;

pub use ending::Ending;
pub use hunter::Hunter;
pub use kit::Kit;
