pub mod config;
pub mod holding;
pub mod insight;
pub mod news;
pub mod stock;
pub mod view;
