pub mod aggregate;
pub mod overtime;
