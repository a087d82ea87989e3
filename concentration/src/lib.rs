pub use board::*;
pub use cards::*;
pub use errors::*;
pub use frontend::*;
pub use game::*;
pub use pick::*;
pub use validation::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cards;
mod errors;
mod frontend;
mod game;
mod pick;
mod validation;
mod visualization;
