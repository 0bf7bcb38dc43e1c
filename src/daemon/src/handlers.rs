pub mod demo;
pub mod health;
pub mod process;
pub mod start;
pub mod stop;
pub mod stop_id;
