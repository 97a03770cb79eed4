pub mod parser;
pub mod path_resolution;

pub use parser::*;
pub use path_resolution::*;
