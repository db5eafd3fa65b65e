// supportbot library - keyword driven support chat

pub mod cli;
mod console;
mod core;
mod error;
pub mod tui;

pub use crate::core::*;
pub use error::Error;
