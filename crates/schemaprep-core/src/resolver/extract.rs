//! Shared annotation-extraction helpers
//!
//! Handlers consume Shape/DType/ContentType hints wherever they appear in
//! the annotation list. Extraction rebuilds a filtered list instead of
//! deleting in place, and the contract for duplicates is explicit: the
//! last-declared hint of a given kind wins.

use crate::annotation::{Annotation, Shape};

/// Shape and dtype hints split out of an annotation list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TensorHints {
    /// Last-declared element-type hint, if any
    pub dtype: Option<String>,
    /// Last-declared shape hint, if any
    pub shape: Option<Shape>,
    /// Every annotation that was not consumed, in declaration order
    pub rest: Vec<Annotation>,
}

/// Extract Shape and DType hints, consuming every occurrence
pub fn split_tensor_hints(annotations: &[Annotation]) -> TensorHints {
    let mut hints = TensorHints::default();
    for annotation in annotations {
        match annotation {
            Annotation::Shape(shape) => hints.shape = Some(shape.clone()),
            Annotation::DType(dtype) => hints.dtype = Some(dtype.name.clone()),
            other => hints.rest.push(other.clone()),
        }
    }
    hints
}

/// Extract a ContentType hint, consuming every occurrence
pub fn split_content_type(annotations: &[Annotation]) -> (Option<String>, Vec<Annotation>) {
    let mut content_type = None;
    let mut rest = Vec::with_capacity(annotations.len());
    for annotation in annotations {
        match annotation {
            Annotation::ContentType(ct) => content_type = Some(ct.media_type.clone()),
            other => rest.push(other.clone()),
        }
    }
    (content_type, rest)
}
