//! Strata engine crate.
//!
//! This crate owns the primitives shared by the symbolizer and the hosts that
//! drive it: coordinate spaces, paint sources and logger setup.

pub mod coords;
pub mod logging;
pub mod paint;
