//! JSON records emitted by the interpreter probe script.

use serde::Deserialize;
use watermark_core::{InterpreterError, PythonInfo, VersionLookup};

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum LookupRecord {
    Found { version: String },
    NotInstalled,
    Unknown,
}

impl From<LookupRecord> for VersionLookup {
    fn from(record: LookupRecord) -> Self {
        match record {
            LookupRecord::Found { version } => Self::Found(version),
            LookupRecord::NotInstalled => Self::NotInstalled,
            LookupRecord::Unknown => Self::Unknown,
        }
    }
}

#[derive(Debug, Deserialize)]
struct InfoRecord {
    implementation: String,
    version: String,
    compiler: String,
    architecture: String,
    ipython: LookupRecord,
}

pub fn parse_info(stdout: &str) -> Result<PythonInfo, InterpreterError> {
    let record: InfoRecord = serde_json::from_str(stdout.trim())
        .map_err(|e| InterpreterError::MalformedOutput(e.to_string()))?;

    Ok(PythonInfo {
        implementation: record.implementation,
        version: record.version,
        compiler: record.compiler,
        architecture: record.architecture,
        ipython: record.ipython.into(),
    })
}

pub fn parse_packages(stdout: &str, expected: usize) -> Result<Vec<VersionLookup>, InterpreterError> {
    let records: Vec<LookupRecord> = serde_json::from_str(stdout.trim())
        .map_err(|e| InterpreterError::MalformedOutput(e.to_string()))?;

    if records.len() != expected {
        return Err(InterpreterError::MalformedOutput(format!(
            "expected {expected} package records, got {}",
            records.len()
        )));
    }
    Ok(records.into_iter().map(VersionLookup::from).collect())
}
