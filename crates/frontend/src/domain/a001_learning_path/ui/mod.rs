pub mod details;
pub mod generate;
