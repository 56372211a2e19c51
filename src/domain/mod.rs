pub mod aggregator;
pub mod builder;
pub mod edge;
pub mod graph;
pub mod node;
pub mod ports;
pub mod style;
pub mod tree;
pub mod visitor;
