//! Application services

pub mod cues;
pub mod pictures;
