//! Matching detector output against enrolled students.
//!
//! The detector and embedder run upstream; everything here works on the
//! vectors and boxes they produce.

pub mod matcher;
pub mod nms;
pub mod similarity;
pub mod votes;
