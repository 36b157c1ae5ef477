//! Declarative mapping rules for the 13 clinical record kinds.
//!
//! Each kind is described by a [`KindRule`]: a table of source-field
//! extraction paths, the transform class applied to each extracted field,
//! and the identity references to resolve. One shared [`MappingEngine`]
//! applies a rule to a raw JSON document and produces a
//! [`deid_model::SanitizedRecord`]; there is no per-kind imperative
//! processing code.
//!
//! Fields classified as dropped (government identifiers, embedded
//! attachment payloads) simply have no rule: they are never extracted in
//! any form.

mod engine;
mod path;
mod rule;
mod rules;

pub use engine::MappingEngine;
pub use path::{FieldPath, PathStep};
pub use rule::{
    DerivedRule, FieldRule, KindRule, RefRule, ShiftKeySource, TransformClass, ValueKind,
    parse_reference,
};
pub use rules::rule_for;
