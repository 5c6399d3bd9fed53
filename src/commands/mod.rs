pub mod config;
pub mod history;
pub mod status;
pub mod watch;
