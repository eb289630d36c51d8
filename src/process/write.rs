use std::{fmt, io, pin::Pin, process::Stdio, task};

use tokio::{
    fs::File,
    io::{AsyncWrite, Stderr, Stdout},
    net::unix::pipe,
};

/// Where a command's output or error stream goes once it has been redirected.
///
/// An unset binding (`None` on the command node) means the shell's own
/// stdout/stderr is inherited. The binding owns its handle; dropping it
/// closes the file or, for a pipe, signals end-of-file to the reader.
pub enum Output {
    File(std::fs::File),
    Pipe(pipe::Sender),
}

impl Output {
    /// Hand the binding to a child process as one of its output descriptors.
    pub fn into_stdio(self) -> io::Result<Stdio> {
        match self {
            Self::File(file) => Ok(Stdio::from(file)),
            Self::Pipe(tx) => Ok(Stdio::from(tx.into_blocking_fd()?)),
        }
    }

    /// Duplicate the binding so the same file can back both sides of a pipe.
    ///
    /// Only file bindings can be duplicated; the engine never fans a pipe
    /// endpoint out to more than one command.
    pub fn try_clone(&self) -> io::Result<Output> {
        match self {
            Self::File(file) => Ok(Self::File(file.try_clone()?)),
            Self::Pipe(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "cannot duplicate a pipe endpoint",
            )),
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(_) => f.write_str("Output::File"),
            Self::Pipe(_) => f.write_str("Output::Pipe"),
        }
    }
}

/// Async writer over an output binding, for in-process producers (the
/// built-in handlers and the engine's own diagnostics).
pub enum OutputWriter {
    Stdout(Stdout),
    Stderr(Stderr),
    File(File),
    Pipe(pipe::Sender),
}

impl OutputWriter {
    /// Writer for a command's output stream; unset bindings inherit the
    /// shell's stdout.
    pub fn stdout(binding: Option<Output>) -> Self {
        match binding {
            None => Self::Stdout(tokio::io::stdout()),
            Some(Output::File(file)) => Self::File(File::from_std(file)),
            Some(Output::Pipe(tx)) => Self::Pipe(tx),
        }
    }

    /// Writer for a command's error stream; unset bindings inherit the
    /// shell's stderr.
    pub fn stderr(binding: Option<Output>) -> Self {
        match binding {
            None => Self::Stderr(tokio::io::stderr()),
            Some(Output::File(file)) => Self::File(File::from_std(file)),
            Some(Output::Pipe(tx)) => Self::Pipe(tx),
        }
    }
}

impl AsyncWrite for OutputWriter {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut task::Context<'_>,
        buf: &[u8],
    ) -> task::Poll<io::Result<usize>> {
        match self.get_mut() {
            Self::Stdout(stdout) => Pin::new(stdout).poll_write(cx, buf),
            Self::Stderr(stderr) => Pin::new(stderr).poll_write(cx, buf),
            Self::File(file) => Pin::new(file).poll_write(cx, buf),
            Self::Pipe(tx) => Pin::new(tx).poll_write(cx, buf),
        }
    }

    fn poll_flush(
        self: Pin<&mut Self>,
        cx: &mut task::Context<'_>,
    ) -> task::Poll<io::Result<()>> {
        match self.get_mut() {
            Self::Stdout(stdout) => Pin::new(stdout).poll_flush(cx),
            Self::Stderr(stderr) => Pin::new(stderr).poll_flush(cx),
            Self::File(file) => Pin::new(file).poll_flush(cx),
            Self::Pipe(tx) => Pin::new(tx).poll_flush(cx),
        }
    }

    fn poll_shutdown(
        self: Pin<&mut Self>,
        cx: &mut task::Context<'_>,
    ) -> task::Poll<io::Result<()>> {
        match self.get_mut() {
            Self::Stdout(stdout) => Pin::new(stdout).poll_shutdown(cx),
            Self::Stderr(stderr) => Pin::new(stderr).poll_shutdown(cx),
            Self::File(file) => Pin::new(file).poll_shutdown(cx),
            Self::Pipe(tx) => Pin::new(tx).poll_shutdown(cx),
        }
    }
}
