mod generator;
mod result;
mod schedule;
mod season;
mod table;

pub use generator::*;
pub use result::*;
pub use schedule::*;
pub use season::*;
pub use table::*;
