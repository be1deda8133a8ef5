pub mod config;
pub mod request_log;
pub mod upstream;
