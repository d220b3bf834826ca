//! HTTP route handlers

pub mod assets;
pub mod games;
