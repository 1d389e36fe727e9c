//! JSON export of normalized values.
//!
//! The write path is the only place the core surfaces an error: an
//! unwritable destination is logged and propagated. Everything upstream of
//! the encoder has already been normalized, and the shared float conversion
//! guarantees the encoder never sees a non-finite number.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::error;

use afriscope_core::Result;

use crate::normalize::normalize;
use crate::value::AnalyticValue;

/// Normalize and encode as a pretty-printed JSON document.
pub fn to_json_string(value: &AnalyticValue) -> Result<String> {
    let canonical = normalize(value);
    Ok(serde_json::to_string_pretty(&canonical)?)
}

/// Normalize `value` and write the JSON document to `path`.
///
/// Fails only when the destination cannot be written; the failure is logged
/// before it propagates.
pub fn save(value: &AnalyticValue, path: &Path) -> Result<()> {
    let canonical = normalize(value);

    let file = match File::create(path) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to open {} for writing: {}", path.display(), e);
            return Err(e.into());
        }
    };

    let mut writer = BufWriter::new(file);
    if let Err(e) = serde_json::to_writer_pretty(&mut writer, &canonical) {
        error!("Failed to write {}: {}", path.display(), e);
        return Err(e.into());
    }
    if let Err(e) = writer.flush() {
        error!("Failed to flush {}: {}", path.display(), e);
        return Err(e.into());
    }

    Ok(())
}

/// Read a previously saved canonical document back.
pub fn load(path: &Path) -> Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Key;
    use afriscope_core::Error;

    #[test]
    fn test_to_json_string_parses_back() {
        let value = AnalyticValue::Map(vec![
            (Key::Text("rate".into()), AnalyticValue::Float(62.5)),
            (Key::Text("gap".into()), AnalyticValue::Float(f64::NAN)),
        ]);
        let text = to_json_string(&value).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["rate"], 62.5);
        assert!(parsed["gap"].is_null());
    }

    #[test]
    fn test_save_fails_on_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        // A directory path cannot be opened as a file for writing.
        let result = save(&AnalyticValue::Int(1), dir.path());
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
