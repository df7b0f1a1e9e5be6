//! Shared helpers for backend tests: logging initialization and assertions
//! for the Problem Details error contract.

pub mod logging;
pub mod problem_details;
