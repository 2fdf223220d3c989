pub mod config;
pub mod isolate;
pub mod labels;
pub mod tuning;
