use serde_json::Value;
use std::io;

use super::result_fields;

/// Write the result as two-column `field,value` CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_csv<W: io::Write>(writer: W, value: &Value) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["field", "value"])?;
    for (field, val) in result_fields(value) {
        wtr.write_record([field, val])?;
    }
    wtr.flush()?;
    Ok(())
}
