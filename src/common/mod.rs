pub mod errors;
mod macros;

pub use errors::*;
