pub mod config;
pub mod errors;
pub mod menu;
pub mod storage;
