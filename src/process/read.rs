use std::{fmt, io, pin::Pin, process::Stdio, task};

use tokio::{
    fs::File,
    io::{AsyncRead, ReadBuf},
    net::unix::pipe,
};

/// Where a command's standard input comes from once it has been redirected.
///
/// An unset binding (`None` on the command node) means the shell's own stdin
/// is inherited. The binding owns its handle; dropping it releases the file
/// or pipe end.
pub enum Input {
    File(std::fs::File),
    Pipe(pipe::Receiver),
}

impl Input {
    /// Hand the binding to a child process as its stdin.
    pub fn into_stdio(self) -> io::Result<Stdio> {
        match self {
            Self::File(file) => Ok(Stdio::from(file)),
            Self::Pipe(rx) => Ok(Stdio::from(rx.into_blocking_fd()?)),
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(_) => f.write_str("Input::File"),
            Self::Pipe(_) => f.write_str("Input::Pipe"),
        }
    }
}

/// Async reader over a redirected input, for in-process consumers such as
/// the built-in stdin drainer.
pub enum InputReader {
    File(File),
    Pipe(pipe::Receiver),
}

impl From<Input> for InputReader {
    fn from(input: Input) -> Self {
        match input {
            Input::File(file) => Self::File(File::from_std(file)),
            Input::Pipe(rx) => Self::Pipe(rx),
        }
    }
}

impl AsyncRead for InputReader {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut task::Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> task::Poll<io::Result<()>> {
        match self.get_mut() {
            Self::File(file) => Pin::new(file).poll_read(cx, buf),
            Self::Pipe(rx) => Pin::new(rx).poll_read(cx, buf),
        }
    }
}
