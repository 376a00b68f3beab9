pub mod activity;
pub mod conversion;
pub mod revenue;
