use async_trait::async_trait;
use enum_dispatch::enum_dispatch;
use strum::{EnumIter, IntoEnumIterator};

use crate::cmd::{execute::ExecError, node::CommandNode};

pub mod cd;
pub mod echo;
pub mod exit;
pub mod pwd;
pub mod type_cmd;

/// A command handled inside the shell process.
///
/// Handlers see the whole command node so they can reach the arguments and
/// whatever streams the tree bound for them.
#[async_trait]
#[enum_dispatch(Builtins)]
pub trait Builtin {
    fn name(&self) -> &'static str;
    async fn run(&self, cmd: &mut CommandNode) -> Result<(), ExecError>;
}

/// The fixed table of built-in commands.
#[enum_dispatch]
#[derive(EnumIter)]
pub enum Builtins {
    Cd(cd::Cd),
    Pwd(pwd::Pwd),
    Exit(exit::Exit),
    Echo(echo::Echo),
    Type(type_cmd::Type),
}

impl Builtins {
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|builtin| builtin.name() == name)
    }

    pub fn is_builtin(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}
