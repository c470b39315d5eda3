pub mod add_investment;
pub mod dashboard;
pub mod investments;
pub mod investors;
pub mod reports;
pub mod settings;
