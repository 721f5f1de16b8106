pub mod analytics;
pub mod chart;
pub mod input;
pub mod projection;
pub mod settings;
pub mod strategy;
pub mod view;
