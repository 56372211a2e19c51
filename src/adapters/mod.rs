pub mod filter;
pub mod fs;
pub mod json;
