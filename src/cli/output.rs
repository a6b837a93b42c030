//! Output formatting for the `mibc-*` tools.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Error;
use crate::op::OpResult;

#[derive(Serialize)]
struct ResultRecord<'a> {
    oid: String,
    #[serde(rename = "type")]
    kind: &'a str,
    value: String,
}

#[derive(Serialize)]
struct ErrorRecord {
    error: String,
    kind: String,
}

/// Write one operation result to stdout.
pub fn write_result(result: &OpResult, json: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        let record = ResultRecord {
            oid: result.oid.to_string(),
            kind: result.kind.name(),
            value: result.value.to_string(),
        };
        let line = serde_json::to_string(&record).map_err(io::Error::other)?;
        writeln!(stdout, "{line}")
    } else {
        writeln!(stdout, "{result}")
    }
}

/// Write an error to stderr, mirroring the requested output format.
pub fn write_error(err: &Error, json: bool) {
    let mut stderr = io::stderr().lock();
    if json {
        let record = ErrorRecord {
            error: err.to_string(),
            kind: err.kind().to_string(),
        };
        if let Ok(line) = serde_json::to_string(&record) {
            let _ = writeln!(stderr, "{line}");
            return;
        }
    }
    let _ = writeln!(stderr, "Error: {err}");
}
