mod builder;
mod collection;
mod player;
mod position;
mod statistics;

pub use builder::*;
pub use collection::*;
pub use player::*;
pub use position::*;
pub use statistics::*;
