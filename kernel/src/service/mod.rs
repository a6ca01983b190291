pub mod booking;
pub mod capacity;
pub mod eligibility;
pub mod existence;
