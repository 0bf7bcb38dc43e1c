pub mod commands;
mod handlers;
pub mod logging;
mod message;
pub mod process_command;
