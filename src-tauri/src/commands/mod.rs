pub mod funnel;
pub mod insights;
pub mod matrix;
pub mod pdca;
pub mod routine;
pub mod settings;
