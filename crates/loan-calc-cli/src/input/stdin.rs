use serde_json::Value;
use std::io::{self, Read};

/// Read a JSON loan document piped on stdin.
/// Returns None when stdin is a terminal.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    read_document(io::stdin().lock())
}

/// Parse one JSON document from `reader`; blank input yields None.
fn read_document<R: Read>(mut reader: R) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    tracing::debug!(bytes = trimmed.len(), "read piped input");
    let value = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse piped input: {}", e))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_none() {
        assert!(read_document("  \n".as_bytes()).unwrap().is_none());
    }

    #[test]
    fn test_document_parsed() {
        let value = read_document(r#"{"apr": "6.0"}"#.as_bytes()).unwrap().unwrap();
        assert_eq!(value["apr"], "6.0");
    }

    #[test]
    fn test_malformed_document_names_source() {
        let err = read_document("{apr".as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse piped input"));
    }
}
