use async_trait::async_trait;
use itertools::Itertools;
use tokio::io::AsyncWriteExt;

use crate::cmd::{execute::ExecError, node::CommandNode};

use super::Builtin;

#[derive(Default)]
pub struct Echo;

#[async_trait]
impl Builtin for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    /// Arguments joined by single spaces, newline terminated. Any escape
    /// processing already happened in the lexer.
    async fn run(&self, cmd: &mut CommandNode) -> Result<(), ExecError> {
        let line = cmd.args.iter().join(" ");

        let mut stdout = cmd.stdout_writer();
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }
}
