pub mod board;
pub mod collection;
pub mod constants;
pub mod countdown;
pub mod cue;
pub mod scheduler;
pub mod tone;

pub use board::*;
pub use collection::*;
pub use constants::*;
pub use countdown::*;
pub use cue::*;
pub use scheduler::*;
pub use tone::*;
