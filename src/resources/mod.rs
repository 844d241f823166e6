//! Precomputed lookup tables.

pub mod sine;
