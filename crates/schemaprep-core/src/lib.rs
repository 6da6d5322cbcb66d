//! Schemaprep Core - Annotation resolution for schema generation
//!
//! This crate teaches a host validation engine to recognize tensor,
//! dataframe, image, and filesystem-path field types and convert them into
//! schema markers carrying semantic metadata: element type, shape, and
//! content type.
//!
//! # Main Components
//!
//! - **Error Handling**: Error types using `thiserror` and `anyhow`
//! - **Type Descriptions**: Module-qualified descriptions of foreign types
//! - **Annotations**: Caller-supplied hints and produced schema markers
//! - **Resolver**: Dispatch wrapper and per-family handler registry
//!
//! # Example
//!
//! ```
//! use schemaprep_core::{
//!     Annotation, ConfigDict, NullEngine, Result, SchemaResolver, TypeExpr,
//! };
//!
//! fn example() -> Result<()> {
//!     let resolver = SchemaResolver::new(NullEngine);
//!     let source = TypeExpr::named("torch", "Tensor");
//!     let annotations = [Annotation::shape([3, 224, 224]), Annotation::dtype("float32")];
//!
//!     let resolution = resolver.resolve(&source, &annotations, &ConfigDict::new())?;
//!     assert!(resolution.is_some());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod annotation;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod types;

// Re-export main types for convenience
pub use annotation::{
    // Caller-supplied hints
    Annotation, ContentType, DType, Dim, Shape,

    // Schema markers
    DataframeOrient, DataframeSchema, FileSchema, PilImageEncoder, TensorKind, TensorSchema,
};
pub use engine::{ConfigDict, NullEngine, Resolution, SchemaEngine};
pub use error::{Error, Result};
pub use resolver::{HandlerRegistry, Library, SchemaResolver, TypeFamilyHandler};
pub use types::{TypeExpr, TypeName};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_error_creation() {
        let err = Error::ConflictingDType {
            inferred: "float32".to_string(),
            declared: "int8".to_string(),
        };
        assert!(err.to_string().contains("float32"));
    }
}
