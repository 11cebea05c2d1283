pub mod deck;
pub mod source;

pub use deck::*;
pub use source::*;
