pub use board::*;
pub use engine::*;
pub use errors::*;
pub use pieces::*;
pub use pieces_set::*;
pub use protocol::*;
pub use reserve::*;
pub use visualization::*;
pub use win::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod engine;
mod errors;
mod pieces;
mod pieces_set;
mod protocol;
mod reserve;
mod visualization;
mod win;
