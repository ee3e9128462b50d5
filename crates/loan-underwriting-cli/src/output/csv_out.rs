use serde_json::Value;
use std::io;

use super::{flatten_fields, result_body};

/// Write output as two-column `field,value` CSV to stdout.
pub fn print_csv(value: &Value) -> csv::Result<()> {
    write_csv(io::stdout().lock(), value)
}

pub(crate) fn write_csv<W: io::Write>(writer: W, value: &Value) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["field", "value"])?;
    for (field, text) in flatten_fields(result_body(value)) {
        wtr.write_record([field, text])?;
    }
    wtr.flush()?;
    Ok(())
}
