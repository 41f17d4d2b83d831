pub mod browse;
pub mod init;
pub mod search;
pub mod show;
pub mod stats;
