use async_trait::async_trait;

use crate::cmd::{execute::ExecError, node::CommandNode};

use super::Builtin;

#[derive(Default)]
pub struct Exit;

#[async_trait]
impl Builtin for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    async fn run(&self, _cmd: &mut CommandNode) -> Result<(), ExecError> {
        trace!("exit requested");
        std::process::exit(0);
    }
}
