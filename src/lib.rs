//! depgraph library: dependency graph aggregation and DOT rendering.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
