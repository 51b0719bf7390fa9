pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod utils;

pub use club::*;
pub use error::*;
pub use r#match::*;
