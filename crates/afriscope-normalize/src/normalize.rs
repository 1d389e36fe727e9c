//! Recursive normalization of analytic values to canonical JSON.
//!
//! `normalize` is total: every shape either has a defined canonical form or
//! falls back to a deterministic string. The match arms below appear in the
//! dispatch priority order of the original cascade (scalars, then structural
//! containers, then object introspection, then the conversion capability,
//! with the JSON fast path after all structural cases and the opaque string
//! last).

use indexmap::IndexMap;
use ndarray::ArrayViewD;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Number, Value};
use tracing::warn;

use crate::value::{AnalyticValue, Frame, Key};

/// Convert an analytic value into a canonical JSON tree.
///
/// Never fails. The only side effect is a warning-level diagnostic when a
/// convertible object's mapping conversion fails.
pub fn normalize(value: &AnalyticValue) -> Value {
    match value {
        AnalyticValue::Null => Value::Null,
        AnalyticValue::Bool(b) => Value::Bool(*b),
        AnalyticValue::Int(i) => Value::Number((*i).into()),
        // NaN and ±Infinity have no JSON literal; they normalize to null so
        // downstream parseability wins over precision.
        AnalyticValue::Float(f) => float_value(*f),
        AnalyticValue::Decimal(d) => float_value(d.to_f64().unwrap_or(f64::NAN)),
        AnalyticValue::DateTime(dt) => Value::String(dt.to_rfc3339()),
        AnalyticValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
        AnalyticValue::Text(s) => Value::String(s.clone()),
        AnalyticValue::Frame(frame) => normalize_frame(frame),
        AnalyticValue::Series(series) => normalize_entries(&series.entries),
        AnalyticValue::Index(keys) => Value::Array(keys.iter().map(key_scalar).collect()),
        AnalyticValue::Array(array) => normalize_array(array.view()),
        AnalyticValue::Tuple(items) | AnalyticValue::List(items) => {
            Value::Array(items.iter().map(normalize).collect())
        }
        AnalyticValue::Set(items) => {
            // Sets have no inherent order; sort by the serialized form of the
            // normalized elements for determinism across runs.
            let mut normalized: Vec<Value> = items.iter().map(normalize).collect();
            normalized.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
            Value::Array(normalized)
        }
        AnalyticValue::Map(entries) => normalize_entries(entries),
        AnalyticValue::Record(fields) | AnalyticValue::Object(fields) => normalize_fields(fields),
        AnalyticValue::Labeled { value, .. } => normalize(value),
        AnalyticValue::Convertible(object) => match object.to_mapping() {
            Ok(entries) => normalize_entries(&entries),
            Err(e) => {
                warn!("Mapping conversion failed, falling back to string form: {}", e);
                Value::String(object.repr())
            }
        },
        AnalyticValue::Json(v) => v.clone(),
        AnalyticValue::Opaque(s) => Value::String(s.clone()),
    }
}

/// Shared float-to-JSON conversion. Non-finite values become null here, so
/// this guard also covers values reaching the encoder directly.
pub(crate) fn float_value(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

/// Scalar form of a key used as a sequence element or an expanded index cell.
fn key_scalar(key: &Key) -> Value {
    match key {
        Key::Null => Value::Null,
        Key::Bool(b) => Value::Bool(*b),
        Key::Int(i) => Value::Number((*i).into()),
        Key::Float(f) => float_value(*f),
        Key::Text(s) => Value::String(s.clone()),
        Key::Composite(_) => Value::String(key.coerce()),
    }
}

/// Build an object from keyed entries. When two keys coerce to the same
/// string the later entry's value wins (lossy, insertion-order dependent;
/// the first-seen key position is kept).
fn normalize_entries(entries: &[(Key, AnalyticValue)]) -> Value {
    let mut object = Map::with_capacity(entries.len());
    for (key, value) in entries {
        object.insert(key.coerce(), normalize(value));
    }
    Value::Object(object)
}

fn normalize_fields(fields: &IndexMap<String, AnalyticValue>) -> Value {
    let mut object = Map::with_capacity(fields.len());
    for (name, value) in fields {
        object.insert(name.clone(), normalize(value));
    }
    Value::Object(object)
}

/// Frames become an array of per-row objects. Multi-part column labels are
/// flattened with `_`; a multi-part row index expands into leading columns.
/// Ragged columns are padded with null.
fn normalize_frame(frame: &Frame) -> Value {
    let mut row_count = frame
        .columns
        .iter()
        .map(|(_, cells)| cells.len())
        .max()
        .unwrap_or(0);
    if let Some(index) = &frame.index {
        row_count = row_count.max(index.keys.len());
    }

    let mut rows = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let mut object = Map::new();
        if let Some(index) = &frame.index {
            for (level, name) in index.names.iter().enumerate() {
                let cell = index
                    .keys
                    .get(row)
                    .and_then(|levels| levels.get(level))
                    .map(key_scalar)
                    .unwrap_or(Value::Null);
                object.insert(name.clone(), cell);
            }
        }
        for (label, cells) in &frame.columns {
            let cell = cells.get(row).map(normalize).unwrap_or(Value::Null);
            object.insert(label.flat(), cell);
        }
        rows.push(Value::Object(object));
    }
    Value::Array(rows)
}

/// Numeric arrays become nested arrays mirroring their shape; non-finite
/// elements become null.
fn normalize_array(view: ArrayViewD<'_, f64>) -> Value {
    if view.ndim() == 0 {
        view.first().map(|f| float_value(*f)).unwrap_or(Value::Null)
    } else {
        Value::Array(view.outer_iter().map(normalize_array).collect())
    }
}
