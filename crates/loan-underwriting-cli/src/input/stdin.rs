use serde_json::Value;
use std::io::{self, Read};
use tracing::debug;

/// Read an application document piped on stdin.
/// Returns None when stdin is a TTY or the pipe is empty, so flags are used instead.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        debug!("stdin is empty, falling back to flags");
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse application on stdin: {e}"))?;
    Ok(Some(value))
}
