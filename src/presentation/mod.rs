//! Text views and the interactive shell.

pub mod shell;
pub mod views;
