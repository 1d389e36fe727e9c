//! Afriscope Normalize — canonical-form conversion of analytic values.
//!
//! Converts heterogeneous analytic results (tabular frames, labeled series,
//! numeric arrays, mappings with non-string keys, domain objects) into a
//! canonical JSON tree that always serializes and round-trips.

pub mod export;
pub mod normalize;
pub mod value;

pub use export::{load, save, to_json_string};
pub use normalize::normalize;
pub use value::{AnalyticValue, Frame, FrameIndex, Key, Label, MappingConvertible, Series};
