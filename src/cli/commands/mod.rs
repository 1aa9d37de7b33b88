pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod recompute;
pub mod series;
pub mod summary;

mod view;
