use serde_json::Value;
use std::io::{self, Write};

/// Pretty-print JSON to stdout, newline terminated.
pub fn print_json(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_json(stdout.lock(), value) {
        eprintln!("JSON write error: {}", e);
    }
}

fn write_json<W: Write>(mut writer: W, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)
}
