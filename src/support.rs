//! Supporting utilities used by the isotherm framework and its models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable. Breaking changes may occur as needed.

pub mod constraint;
pub mod newton;
