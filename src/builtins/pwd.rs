use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::cmd::{execute::ExecError, node::CommandNode};

use super::Builtin;

#[derive(Default)]
pub struct Pwd;

#[async_trait]
impl Builtin for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    async fn run(&self, cmd: &mut CommandNode) -> Result<(), ExecError> {
        let cwd = match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(err) => {
                let mut stderr = cmd.stderr_writer();
                stderr
                    .write_all(format!("pwd: {err}\n").as_bytes())
                    .await?;
                stderr.flush().await?;
                return Err(ExecError::Io(err));
            }
        };

        let mut stdout = cmd.stdout_writer();
        stdout
            .write_all(format!("{}\n", cwd.display()).as_bytes())
            .await?;
        stdout.flush().await?;
        Ok(())
    }
}
