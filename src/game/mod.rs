pub(crate) mod board;
pub(crate) mod components;
pub(crate) mod error;
pub(crate) mod input;
pub(crate) mod render;
mod session;

pub use board::Board;
pub use components::{Player, Status, Tile};
pub use error::{Error, GameResult};
pub use input::Input;
pub use render::Renderer;
pub use session::GameSession;
