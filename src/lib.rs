//! IFS-TOPSIS - Intuitionistic fuzzy group decision making
//!
//! This crate ranks alternatives judged by several decision makers against
//! benefit and cost criteria. Linguistic judgments are mapped to
//! intuitionistic fuzzy numbers, fused with the IFWA operator, ranked by
//! TOPSIS relative closeness and checked with a sensitivity sweep over
//! alternative scoring formulas.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
