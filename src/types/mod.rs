pub mod candidate;
pub mod config;
pub mod report;
pub mod review;
pub mod rubric;
pub mod scoring;
