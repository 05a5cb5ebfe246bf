pub mod deals;
pub mod staffing;
