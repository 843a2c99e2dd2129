//! User-input structs validated before they touch the domain.

pub mod announcement;
pub mod filters;
pub mod price;
pub mod property;
