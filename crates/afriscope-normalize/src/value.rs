//! The closed set of analytic value shapes the normalizer recognizes.
//!
//! Heterogeneous analytic results (tabular frames, labeled series, numeric
//! arrays, mappings with non-string keys, domain objects) are modeled as an
//! explicit tagged union instead of runtime capability probing, so the
//! dispatch order is auditable and testable.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use ndarray::ArrayD;
use rust_decimal::Decimal;

use afriscope_core::Result;

/// A mapping key or axis label. Keys are not restricted to strings; the
/// normalizer coerces them via [`Key::coerce`].
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Multi-part key (e.g. a multi-level axis label).
    Composite(Vec<Key>),
}

impl Key {
    /// Coerce the key to its canonical string form: multi-part keys join
    /// their parts with `_`, numeric keys use their numeric string, the null
    /// key becomes the literal `"null"`, everything else its display form.
    pub fn coerce(&self) -> String {
        match self {
            Key::Null => "null".to_string(),
            Key::Bool(b) => b.to_string(),
            Key::Int(i) => i.to_string(),
            Key::Float(f) => f.to_string(),
            Key::Text(s) => s.clone(),
            Key::Composite(parts) => parts
                .iter()
                .map(Key::coerce)
                .collect::<Vec<_>>()
                .join("_"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_string())
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

/// A column label, possibly multi-level.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Name(String),
    Multi(Vec<String>),
}

impl Label {
    /// Flatten to a single column name; multi-level parts join with `_`.
    pub fn flat(&self) -> String {
        match self {
            Label::Name(name) => name.clone(),
            Label::Multi(parts) => parts.join("_"),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Name(s.to_string())
    }
}

/// A 2-D tabular frame: named columns holding cells column-major, with an
/// optional multi-level row index.
#[derive(Debug)]
pub struct Frame {
    pub columns: Vec<(Label, Vec<AnalyticValue>)>,
    /// Present only when the row index is multi-part; a trivial positional
    /// index carries no information and is dropped.
    pub index: Option<FrameIndex>,
}

impl Frame {
    pub fn new(columns: Vec<(Label, Vec<AnalyticValue>)>) -> Self {
        Self {
            columns,
            index: None,
        }
    }

    pub fn with_index(mut self, index: FrameIndex) -> Self {
        self.index = Some(index);
        self
    }
}

/// Multi-level row index: one name per level, one key tuple per row.
#[derive(Debug)]
pub struct FrameIndex {
    pub names: Vec<String>,
    pub keys: Vec<Vec<Key>>,
}

/// A 1-D labeled sequence, insertion-ordered.
#[derive(Debug)]
pub struct Series {
    pub entries: Vec<(Key, AnalyticValue)>,
}

impl Series {
    pub fn new(entries: Vec<(Key, AnalyticValue)>) -> Self {
        Self { entries }
    }
}

/// An object exposing an explicit "to mapping" conversion.
///
/// When the conversion fails the normalizer falls back to [`repr`] and logs
/// a warning; the failure never propagates.
///
/// [`repr`]: MappingConvertible::repr
pub trait MappingConvertible: fmt::Debug + Send + Sync {
    fn to_mapping(&self) -> Result<Vec<(Key, AnalyticValue)>>;

    /// Display form used as the fallback representation.
    fn repr(&self) -> String;
}

/// Every value shape the normalizer accepts. One variant per recognized
/// category; [`crate::normalize`] carries exactly one match arm per variant.
#[derive(Debug)]
pub enum AnalyticValue {
    /// Absent value.
    Null,
    Bool(bool),
    /// Integer-like scalar of any bit width, widened to i64.
    Int(i64),
    /// Floating-point scalar; NaN and ±Infinity normalize to null.
    Float(f64),
    /// Fixed-point decimal; widened to float on normalization.
    Decimal(Decimal),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    Text(String),
    /// 2-D tabular frame.
    Frame(Frame),
    /// 1-D labeled sequence.
    Series(Series),
    /// Plain ordered label sequence.
    Index(Vec<Key>),
    /// Homogeneous numeric array of any dimensionality.
    Array(ArrayD<f64>),
    /// Fixed-arity ordered sequence; arity is not preserved as a type.
    Tuple(Vec<AnalyticValue>),
    List(Vec<AnalyticValue>),
    /// Set-like collection; normalized output is sorted for determinism.
    Set(Vec<AnalyticValue>),
    /// Mapping with arbitrary key types, insertion-ordered.
    Map(Vec<(Key, AnalyticValue)>),
    /// Structured object with schema-declared named fields.
    Record(IndexMap<String, AnalyticValue>),
    /// Generic object exposing named attributes, insertion-ordered.
    Object(IndexMap<String, AnalyticValue>),
    /// Enumerated constant carrying an underlying value; the label is
    /// discarded on normalization.
    Labeled {
        label: String,
        value: Box<AnalyticValue>,
    },
    /// Object with an explicit "to mapping" conversion capability.
    Convertible(Box<dyn MappingConvertible>),
    /// Already JSON-representable structure (fast path, passed through).
    Json(serde_json::Value),
    /// Opaque/unsupported value, reduced to its display string.
    Opaque(String),
}

impl From<bool> for AnalyticValue {
    fn from(b: bool) -> Self {
        AnalyticValue::Bool(b)
    }
}

impl From<i64> for AnalyticValue {
    fn from(i: i64) -> Self {
        AnalyticValue::Int(i)
    }
}

impl From<f64> for AnalyticValue {
    fn from(f: f64) -> Self {
        AnalyticValue::Float(f)
    }
}

impl From<&str> for AnalyticValue {
    fn from(s: &str) -> Self {
        AnalyticValue::Text(s.to_string())
    }
}

impl From<String> for AnalyticValue {
    fn from(s: String) -> Self {
        AnalyticValue::Text(s)
    }
}
