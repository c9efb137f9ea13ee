//! Criterion benchmarks for the Lumen front end.
//!
//! The actual benchmarks live under `benches/`; this crate exists only to
//! anchor the bench targets in the workspace.
