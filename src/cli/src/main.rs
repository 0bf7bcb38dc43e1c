use colored::Colorize;
use lifecycle_cli::error_message;
use lifecycle_cli::process_command::process_cli;

pub fn main() {
    if let Err(e) = process_cli() {
        error_message!("{e:#}");
        std::process::exit(1);
    }
}
