use std::{fs, io, os::unix::fs::OpenOptionsExt, process::Stdio};

use async_recursion::async_recursion;
use thiserror::Error;
use tokio::{io::AsyncWriteExt, net::unix::pipe, process::Command};

use crate::{
    builtins::{Builtin, Builtins},
    parse::token::RedirectKind,
    process::{Input, InputReader, Output, OutputWriter},
};

use super::{
    node::{CommandNode, Node, RedirectNode},
    resolve::resolve,
};

/// Why a tree (or one of its subtrees) failed.
///
/// User-facing diagnostics are written at the failure site, to the stream the
/// tree bound for errors; the value itself only carries the failure upward so
/// a pipe can prefer its left side's error.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{0}: command not found")]
    CommandNotFound(String),
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to spawn {name}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("{name}: {message}")]
    Builtin {
        name: &'static str,
        message: String,
    },
    #[error("command exited with {0}")]
    ExitStatus(std::process::ExitStatus),
    #[error("pipeline task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Run one execution tree to completion.
#[async_recursion]
pub async fn execute(node: Node) -> Result<(), ExecError> {
    match node {
        Node::Command(cmd) => execute_command(cmd).await,
        Node::Redirect(redirect) => execute_redirect(redirect).await,
        Node::Pipe(left, right) => execute_pipe(*left, *right).await,
    }
}

async fn execute_command(mut cmd: CommandNode) -> Result<(), ExecError> {
    if let Some(builtin) = Builtins::from_name(&cmd.name) {
        // Built-ins never read their input. When it was redirected away from
        // the shell's own stdin an upstream writer may be waiting on a
        // consumer, so drain the binding to end-of-stream in the background.
        if let Some(input) = cmd.stdin.take() {
            trace!("draining redirected stdin for builtin {}", cmd.name);
            tokio::spawn(async move {
                let mut reader = InputReader::from(input);
                let _ = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await;
            });
        }
        return builtin.run(&mut cmd).await;
    }

    let Some(path) = resolve(&cmd.name) else {
        let mut stderr = cmd.stderr_writer();
        stderr
            .write_all(format!("{}: command not found\n", cmd.name).as_bytes())
            .await?;
        stderr.flush().await?;
        return Err(ExecError::CommandNotFound(cmd.name));
    };

    let mut command = Command::new(&path);
    command.args(&cmd.args);
    command.stdin(match cmd.stdin.take() {
        Some(input) => input.into_stdio()?,
        None => Stdio::inherit(),
    });
    command.stdout(match cmd.stdout.take() {
        Some(output) => output.into_stdio()?,
        None => Stdio::inherit(),
    });
    command.stderr(match cmd.stderr.take() {
        Some(output) => output.into_stdio()?,
        None => Stdio::inherit(),
    });

    trace!("spawning {} as {}", cmd.name, path.display());
    let mut child = command.spawn().map_err(|source| ExecError::Spawn {
        name: cmd.name.clone(),
        source,
    })?;

    let status = child.wait().await?;
    trace!("{} exited: {status}", cmd.name);
    if status.success() {
        Ok(())
    } else {
        Err(ExecError::ExitStatus(status))
    }
}

async fn execute_redirect(redirect: RedirectNode) -> Result<(), ExecError> {
    let RedirectNode {
        mut child,
        kind,
        filename,
    } = redirect;

    let opened = match kind {
        RedirectKind::In => fs::File::open(&filename).map_err(|source| ExecError::Open {
            path: filename.clone(),
            source,
        }),
        RedirectKind::Out | RedirectKind::OutFd | RedirectKind::Err | RedirectKind::ErrOut => {
            create_truncated(&filename).map_err(|source| ExecError::Create {
                path: filename.clone(),
                source,
            })
        }
        RedirectKind::Append | RedirectKind::AppendFd | RedirectKind::ErrAppend => {
            open_append(&filename).map_err(|source| ExecError::Open {
                path: filename.clone(),
                source,
            })
        }
    };
    let file = match opened {
        Ok(file) => file,
        Err(err) => return report_open_failure(err).await,
    };

    match kind {
        RedirectKind::In => child.set_input(Input::File(file)),
        RedirectKind::Out | RedirectKind::OutFd | RedirectKind::Append | RedirectKind::AppendFd => {
            child.set_output(Output::File(file))
        }
        RedirectKind::Err | RedirectKind::ErrAppend => child.set_error(Output::File(file))?,
        RedirectKind::ErrOut => {
            let duplicate = file.try_clone()?;
            child.set_output(Output::File(file));
            child.set_error(Output::File(duplicate))?;
        }
    }

    execute(*child).await
}

async fn execute_pipe(mut left: Node, mut right: Node) -> Result<(), ExecError> {
    let (tx, rx) = pipe::pipe()?;
    left.set_output(Output::Pipe(tx));
    right.set_input(Input::Pipe(rx));

    trace!("running pipe sides concurrently");
    let left_task = tokio::spawn(execute(left));
    let right_task = tokio::spawn(execute(right));

    // Join both sides before returning so neither task is orphaned; when
    // both fail the left error wins.
    let (left_result, right_result) = tokio::join!(left_task, right_task);
    let left_result = left_result.map_err(ExecError::from).and_then(|res| res);
    let right_result = right_result.map_err(ExecError::from).and_then(|res| res);

    left_result?;
    right_result
}

/// Redirect targets are created with mode 0644, subject to umask.
fn create_truncated(path: &str) -> io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

fn open_append(path: &str) -> io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .append(true)
        .mode(0o644)
        .open(path)
}

/// An unopenable redirect target means the wrapped command never runs; the
/// diagnostic goes to the shell's own stderr.
async fn report_open_failure(err: ExecError) -> Result<(), ExecError> {
    let mut stderr = OutputWriter::stderr(None);
    let _ = stderr.write_all(format!("{err}\n").as_bytes()).await;
    let _ = stderr.flush().await;
    Err(err)
}
