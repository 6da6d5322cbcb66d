//! Seam into the host validation engine's schema compiler
//!
//! The engine that compiles field declarations into validation schemas is an
//! external collaborator. This crate only needs two things from it: its own
//! built-in resolution for types it natively understands, and its split of an
//! annotation list into metadata it already knows versus everything else.
//! Both are expressed on the [`SchemaEngine`] trait with conservative
//! defaults, so a host that offers neither can still drive the resolver.

use crate::annotation::Annotation;
use crate::types::TypeExpr;
use serde_json::{Map, Value};

/// Opaque per-model configuration, passed through unexamined
pub type ConfigDict = Map<String, Value>;

/// Outcome of a successful resolution: the canonical type to compile
/// against and the ordered annotation list to compile with
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Possibly-rewritten canonical type
    pub source: TypeExpr,
    /// Schema marker (if any) followed by unconsumed annotations in
    /// declaration order
    pub annotations: Vec<Annotation>,
}

impl Resolution {
    pub fn new(source: TypeExpr, annotations: Vec<Annotation>) -> Self {
        Self {
            source,
            annotations,
        }
    }
}

/// The host engine's extension surface
pub trait SchemaEngine {
    /// The engine's built-in resolution for types it natively understands.
    ///
    /// A non-`None` result is returned to the caller verbatim; this crate
    /// never inspects or rewrites it. The default knows no types.
    fn resolve_known_type(
        &self,
        _source: &TypeExpr,
        _annotations: &[Annotation],
        _config: &ConfigDict,
    ) -> Option<Resolution> {
        None
    }

    /// Split annotations into engine-known metadata and the rest.
    ///
    /// Family handlers only scan the "rest"; engine-known metadata is the
    /// engine's to re-apply. The default claims nothing.
    fn collect_known_metadata(
        &self,
        annotations: &[Annotation],
    ) -> (Vec<Annotation>, Vec<Annotation>) {
        (Vec::new(), annotations.to_vec())
    }
}

/// An engine that understands no types and claims no metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEngine;

impl SchemaEngine for NullEngine {}
