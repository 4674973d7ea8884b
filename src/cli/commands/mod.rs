pub mod check;
mod command_result;
pub mod init;
pub mod keys;
pub mod language;
pub mod translate;

pub use command_result::*;
