//! Runtime values and variable lookup.

mod value;
mod variables;

pub use value::Value;
pub use variables::{MapVariables, NoVariables, Variables};

#[cfg(test)]
mod value_test;
