use std::io::Write;

use color_eyre::Result;
use tracing::{debug, trace};
use tracing_subscriber::prelude::*;

use marsh::{cmd, input, parse};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // The terminal belongs to the prompt and the commands, so diagnostics go
    // to a file next to wherever the shell was started.
    let (writer, _guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(".", "marsh.log"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_error::ErrorLayer::default())
        .init();

    color_eyre::install()?;

    let prompt = std::env::var("MARSH_PROMPT").unwrap_or_else(|_| "$ ".into());

    let mut stdout = std::io::stdout();

    loop {
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        match input::read_line().await {
            input::InputMessage::Line(line) => match parse::parse_line(&line) {
                Ok(Some(tree)) => {
                    trace!("parsed command: {tree:?}");
                    if let Err(err) = cmd::execute(tree).await {
                        // Failure sites already wrote their diagnostics to
                        // the stream the tree bound for errors.
                        debug!("execution failed: {err}");
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("parse error: {err}"),
            },
            input::InputMessage::Error(err) => {
                eprintln!("An error occurred while reading the command line: {err}");
                std::process::exit(2);
            }
        }
    }
}
