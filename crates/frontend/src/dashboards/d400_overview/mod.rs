pub mod chart;
pub mod data;
pub mod ui;
