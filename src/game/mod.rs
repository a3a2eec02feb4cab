mod grid;
pub use grid::*;
mod game;
pub use game::*;
pub mod layouts;
