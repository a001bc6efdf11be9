//! CLI command implementations

mod generate;
mod input;
mod validate;

pub use generate::generate;
pub use validate::validate;
