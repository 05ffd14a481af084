mod command;
mod config;
mod error;
mod game;
mod recording;
mod replay;
pub use command::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use recording::*;
pub use replay::*;
