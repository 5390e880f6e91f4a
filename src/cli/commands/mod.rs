pub mod config;
pub mod del;
pub mod export;
pub mod grid;
pub mod init;
pub mod item;
pub mod lifecycle;
pub mod list;
pub mod log;
pub mod new;
pub mod set;
pub mod show;
pub mod sign;
