//! CLI command implementations.

mod check;
mod compile;

pub use check::{run_check, CheckArgs};
pub use compile::{run_compile, CompileArgs};
