mod builder;
pub mod matches;
mod sequence;
mod statistics;
mod team;

pub use builder::*;
pub use matches::*;
pub use sequence::*;
pub use statistics::*;
pub use team::*;
