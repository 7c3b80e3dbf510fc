pub mod add;
pub mod calculator;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod import;
pub mod log;
pub mod reconcile;
