// src/core.rs
pub mod classifier;
pub mod collector;
pub mod report;
pub mod scanner;
