//! Terminal front end: settings plus a line-based command session.

pub mod config;
pub mod session;

pub use config::{ConsoleConfig, Mode};
pub use session::{run, Control, Session, HELP};
