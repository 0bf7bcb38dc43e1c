mod demo;
mod local;
mod process;
mod serve;

pub use demo::demo;
pub use local::{fingerprint, print_config};
pub use process::{get, start, stop};
pub use serve::serve;
