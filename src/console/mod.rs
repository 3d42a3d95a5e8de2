//! Text console helpers for front-ends.
//!
//! - `Input`: parses a typed line into a move or a command
//! - `SecretBuffer`: watches typed characters for the secret code
//!
//! Unknown commands are a console concern and never become engine errors.

mod command;
mod secret;

pub use command::{Command, ConsoleError, Input, HELP};
pub use secret::{SecretBuffer, SECRET_CODE};
