use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::cmd::{execute::ExecError, node::CommandNode};

use super::Builtin;

#[derive(Default)]
pub struct Cd;

#[async_trait]
impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn run(&self, cmd: &mut CommandNode) -> Result<(), ExecError> {
        let Some(arg) = cmd.args.first().cloned() else {
            let mut stderr = cmd.stderr_writer();
            stderr.write_all(b"cd: missing argument\n").await?;
            stderr.flush().await?;
            return Err(ExecError::Builtin {
                name: "cd",
                message: "missing argument".into(),
            });
        };

        let path = if arg == "~" {
            std::env::var("HOME").unwrap_or_default()
        } else {
            arg.clone()
        };

        if std::env::set_current_dir(&path).is_err() {
            let mut stderr = cmd.stderr_writer();
            stderr
                .write_all(format!("cd: {arg}: No such file or directory\n").as_bytes())
                .await?;
            stderr.flush().await?;
            return Err(ExecError::Builtin {
                name: "cd",
                message: format!("{arg}: No such file or directory"),
            });
        }

        Ok(())
    }
}
