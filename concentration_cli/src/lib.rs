mod setup;
mod terminal;
pub use setup::*;
pub use terminal::*;
