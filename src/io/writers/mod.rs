//! XML output: the full standoff form preserving every annotation set (with
//! a reader for round-tripping), and the inline-tagged form restricted to a
//! chosen subset of annotations.
pub mod inline;
pub mod standoff;
