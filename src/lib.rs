//! A small interactive shell: pipelines, redirections, and a handful of
//! built-in commands, executed concurrently on a tokio runtime.
//!
//! One input line flows through [`parse`] (fields, tokens, tree) and is run
//! by [`cmd::execute`]; [`process`] owns the stream bindings between tree
//! nodes and the outside world.

#[macro_use]
extern crate tracing;

pub mod builtins;
pub mod cmd;
pub mod input;
pub mod parse;
pub mod process;
