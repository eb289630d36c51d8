pub mod execute;
pub mod node;
pub mod resolve;

pub use execute::{execute, ExecError};
