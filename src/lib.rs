pub mod error;
mod filtering;
pub mod io;
pub mod morph;
mod normalize;
pub mod progress;
pub mod rank;
pub mod segment;
mod toolkit;

pub use error::InputError;
pub use filtering::*;
pub use normalize::*;
pub use rank::RankedWords;
pub use toolkit::{Toolkit, ToolkitBuilder};
