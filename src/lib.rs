// region:    --- Modules

mod catalog;
mod config;
mod error;
mod fix_match;
mod game;
mod levels;
mod normalize;
mod puzzle;
mod scoring;
mod session;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use fix_match::*;
pub use game::*;
pub use levels::*;
pub use normalize::*;
pub use puzzle::*;
pub use scoring::*;
pub use session::*;


// endregion: --- Modules
