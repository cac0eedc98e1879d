pub mod activity;
pub mod bmi;
pub mod config;
pub mod dashboard;
pub mod heart_rate;

pub use activity::{add as add_activity, list as list_activities};
pub use bmi::{add as add_bmi, history as bmi_history};
pub use config::show as show_config;
pub use dashboard::show as show_dashboard;
pub use heart_rate::{add as add_heart_rate, history as heart_rate_history, show as show_heart_rate};
