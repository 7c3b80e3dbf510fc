pub mod aggregate;
pub mod day_metrics;
pub mod day_record;
pub mod filter;
pub mod policy;
pub mod punch;
