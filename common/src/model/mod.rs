pub mod custom_field;
pub mod dashboard;
pub mod investment;
pub mod investor;
