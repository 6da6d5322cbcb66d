//! Resolution dispatch
//!
//! [`SchemaResolver`] is the single entry point the engine's schema compiler
//! calls per encountered type. The order is fixed: unhashable types are
//! rejected outright, the path handler runs before the engine's own
//! resolution so path types get file-schema treatment, the engine's result
//! is returned verbatim when it recognizes the type, and only then is the
//! family-handler chain consulted.

use crate::annotation::Annotation;
use crate::engine::{ConfigDict, Resolution, SchemaEngine};
use crate::error::Result;
use crate::resolver::path::PathTypeHandler;
use crate::resolver::registry::HandlerRegistry;
use crate::types::TypeExpr;

/// Dispatch wrapper around a host engine and a handler registry
pub struct SchemaResolver<E> {
    engine: E,
    registry: HandlerRegistry,
    path_handler: PathTypeHandler,
}

impl<E: SchemaEngine> SchemaResolver<E> {
    /// Resolver with the default registry (every shipped integration)
    pub fn new(engine: E) -> Self {
        Self::with_registry(engine, HandlerRegistry::with_defaults())
    }

    /// Resolver with an explicit registry
    pub fn with_registry(engine: E, registry: HandlerRegistry) -> Self {
        Self {
            engine,
            registry,
            path_handler: PathTypeHandler,
        }
    }

    /// The wrapped engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Resolve one declared field type.
    ///
    /// `Ok(None)` means no handler recognized the type and the caller
    /// should fall back to its own generic behavior.
    pub fn resolve(
        &self,
        source: &TypeExpr,
        annotations: &[Annotation],
        config: &ConfigDict,
    ) -> Result<Option<Resolution>> {
        // The engine's annotation indexing requires a stable identity
        if !source.is_hashable() {
            return Ok(None);
        }

        if let Some(resolution) =
            self.path_handler
                .resolve(source, annotations, config, &self.engine)?
        {
            log::debug!("path handler resolved type {source}");
            return Ok(Some(resolution));
        }

        if let Some(resolution) = self.engine.resolve_known_type(source, annotations, config) {
            log::debug!("engine resolved known type {source}");
            return Ok(Some(resolution));
        }

        self.registry
            .resolve(source, annotations, config, &self.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{FileSchema, TensorKind};
    use crate::engine::NullEngine;
    use crate::resolver::registry::Library;
    use crate::types::TypeName;

    fn resolver() -> SchemaResolver<NullEngine> {
        SchemaResolver::new(NullEngine)
    }

    /// Engine that claims every type, including paths
    struct GreedyEngine;

    impl SchemaEngine for GreedyEngine {
        fn resolve_known_type(
            &self,
            source: &TypeExpr,
            annotations: &[Annotation],
            _config: &ConfigDict,
        ) -> Option<Resolution> {
            Some(Resolution::new(source.clone(), annotations.to_vec()))
        }
    }

    #[test]
    fn test_unhashable_source_short_circuits() {
        let result = resolver()
            .resolve(&TypeExpr::Opaque, &[], &ConfigDict::new())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_unrecognized_type_returns_none() {
        let source = TypeExpr::named("decimal", "Decimal");
        let result = resolver()
            .resolve(&source, &[], &ConfigDict::new())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_path_handler_overrides_engine() {
        let resolver = SchemaResolver::new(GreedyEngine);
        let source = TypeExpr::named("pathlib", "Path");
        let resolution = resolver
            .resolve(&source, &[], &ConfigDict::new())
            .unwrap()
            .unwrap();
        assert_eq!(
            resolution.annotations,
            vec![Annotation::FileSchema(FileSchema::new(None))]
        );
    }

    #[test]
    fn test_engine_result_passed_through_verbatim() {
        let resolver = SchemaResolver::new(GreedyEngine);
        let source = TypeExpr::named("numpy", "ndarray");
        let annotations = vec![Annotation::dtype("float32")];
        let resolution = resolver
            .resolve(&source, &annotations, &ConfigDict::new())
            .unwrap()
            .unwrap();
        // The engine claimed it first; the numpy handler never ran
        assert_eq!(resolution.annotations, annotations);
    }

    #[test]
    fn test_first_matching_handler_wins() {
        let resolver = resolver();
        let source = TypeExpr::named("numpy", "ndarray");
        let resolution = resolver
            .resolve(&source, &[], &ConfigDict::new())
            .unwrap()
            .unwrap();
        match &resolution.annotations[0] {
            Annotation::TensorSchema(schema) => assert_eq!(schema.kind, TensorKind::NumpyArray),
            other => panic!("expected tensor schema, got {other:?}"),
        }
    }

    #[test]
    fn test_restricted_registry_skips_family() {
        let registry = HandlerRegistry::with_available(|lib| lib != Library::Torch);
        let resolver = SchemaResolver::with_registry(NullEngine, registry);
        let source = TypeExpr::named("torch", "Tensor");
        let result = resolver
            .resolve(&source, &[], &ConfigDict::new())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_subclass_resolution_through_dispatch() {
        let source =
            TypeExpr::Named(TypeName::new("torch.nn", "Parameter").with_base("torch.Tensor"));
        let resolution = resolver()
            .resolve(&source, &[], &ConfigDict::new())
            .unwrap()
            .unwrap();
        match &resolution.annotations[0] {
            Annotation::TensorSchema(schema) => assert_eq!(schema.kind, TensorKind::TorchTensor),
            other => panic!("expected tensor schema, got {other:?}"),
        }
    }
}
