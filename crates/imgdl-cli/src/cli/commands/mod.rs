//! CLI command handlers, one file per command.

mod fetch;
mod run;

pub use fetch::run_fetch;
pub use run::run_batch_command;
#[cfg(test)]
pub(crate) use run::plan_for;
