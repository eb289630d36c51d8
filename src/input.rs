use std::io::BufRead;

#[derive(Debug)]
pub enum InputMessage {
    Line(String),
    Error(String),
}

/// Read one prompt line on the blocking pool.
///
/// Stdin is only touched while the prompt is waiting, so a foreground child
/// that inherits it is the sole reader while it runs. Lines arrive trimmed
/// of surrounding whitespace; end-of-input is reported as a read error.
pub async fn read_line() -> InputMessage {
    let read = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => InputMessage::Error("EOF".into()),
            Ok(_) => InputMessage::Line(line.trim().to_owned()),
            Err(err) => InputMessage::Error(err.to_string()),
        }
    })
    .await;

    match read {
        Ok(message) => message,
        Err(err) => InputMessage::Error(err.to_string()),
    }
}
