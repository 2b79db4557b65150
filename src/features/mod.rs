pub mod predictions;
pub mod reports;
