pub mod reader;
pub mod style;
