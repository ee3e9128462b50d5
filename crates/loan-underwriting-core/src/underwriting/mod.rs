//! Loan underwriting pipeline.
//!
//! Validator → limit capper → rate modifier → payment → verdict. Every stage is
//! a pure function over decimal values; [`decision::decide`] wires them together.

pub mod application;
pub mod decision;
pub mod limit;
pub mod payment;
pub mod rate;
pub mod summary;
pub mod validation;
pub mod verdict;
