//! Stream bindings between the execution tree and the outside world.
//!
//! A command node carries one optional binding per standard stream. Unset
//! bindings inherit the shell's own streams; set bindings own a file handle
//! or one end of a kernel pipe and are released by drop.

pub mod read;
pub mod write;

pub use read::{Input, InputReader};
pub use write::{Output, OutputWriter};
