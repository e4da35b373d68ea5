pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod path;
pub mod process;
