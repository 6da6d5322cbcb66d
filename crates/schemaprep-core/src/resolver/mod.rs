//! Annotation resolution
//!
//! The resolver maps a declared field type plus its annotations to a schema
//! marker the host engine can compile, or to nothing when the type belongs
//! to none of the supported families.
//!
//! # Module Organization
//!
//! - [`dispatch`] - Entry point: hashability gate, path override, engine
//!   delegation, family-handler chain
//! - [`registry`] - Capability-based handler registry and the
//!   [`TypeFamilyHandler`] trait
//! - [`extract`] - Shared annotation-extraction helpers
//! - [`numpy`], [`tensor`], [`dataframe`], [`image`], [`path`] - The
//!   per-family handlers

pub mod dataframe;
pub mod dispatch;
pub mod extract;
pub mod image;
pub mod numpy;
pub mod path;
pub mod registry;
pub mod tensor;

pub use dataframe::DataframeHandler;
pub use dispatch::SchemaResolver;
pub use extract::{split_content_type, split_tensor_hints, TensorHints};
pub use image::ImageHandler;
pub use numpy::NumpyArrayHandler;
pub use path::PathTypeHandler;
pub use registry::{HandlerRegistry, Library, TypeFamilyHandler};
pub use tensor::MlTensorHandler;
