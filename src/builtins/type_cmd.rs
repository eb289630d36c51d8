use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::cmd::{execute::ExecError, node::CommandNode, resolve::resolve};

use super::{Builtin, Builtins};

#[derive(Default)]
pub struct Type;

#[async_trait]
impl Builtin for Type {
    fn name(&self) -> &'static str {
        "type"
    }

    async fn run(&self, cmd: &mut CommandNode) -> Result<(), ExecError> {
        let Some(name) = cmd.args.first().cloned() else {
            let mut stderr = cmd.stderr_writer();
            stderr.write_all(b"type: missing argument\n").await?;
            stderr.flush().await?;
            return Err(ExecError::Builtin {
                name: "type",
                message: "missing argument".into(),
            });
        };

        // Builtins shadow the search path, like the dispatcher itself.
        let line = if Builtins::is_builtin(&name) {
            format!("{name} is a shell builtin\n")
        } else if let Some(path) = resolve(&name) {
            format!("{name} is {}\n", path.display())
        } else {
            format!("{name}: not found\n")
        };

        let mut stdout = cmd.stdout_writer();
        stdout.write_all(line.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}
