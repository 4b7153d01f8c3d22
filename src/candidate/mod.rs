//! Candidate extraction from correlation results.

pub mod hits;
pub mod topk;
