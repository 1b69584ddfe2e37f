pub mod outcome;
pub use outcome::*;

pub mod player;
pub use player::*;

pub mod prediction;
pub use prediction::*;

pub mod stakes;
pub use stakes::*;

pub mod table;
pub use table::*;
