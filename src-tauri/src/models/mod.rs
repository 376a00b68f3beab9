pub mod funnel;
pub mod insight;
pub mod pdca;
pub mod responsibility;
pub mod routine;
pub mod state;
