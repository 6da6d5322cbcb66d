//! Capability-based handler registry
//!
//! Each supported library contributes one [`TypeFamilyHandler`]: a predicate
//! over type identity plus a builder that produces the resolution. Handlers
//! are tried in registration order and the first non-`None` result wins.
//! Integrations for libraries the host does not have installed are simply
//! never registered, so an absent optional dependency costs nothing.

use crate::annotation::Annotation;
use crate::engine::{ConfigDict, Resolution, SchemaEngine};
use crate::error::{Error, Result};
use crate::resolver::{
    dataframe::DataframeHandler, image::ImageHandler, numpy::NumpyArrayHandler,
    tensor::MlTensorHandler,
};
use crate::types::TypeExpr;

/// Optional library integrations this crate ships handlers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Library {
    Numpy,
    Torch,
    TensorFlow,
    Pandas,
    Pillow,
}

impl Library {
    /// All integrations, in the order the default registry tries them
    pub const ALL: [Library; 5] = [
        Library::Numpy,
        Library::Torch,
        Library::TensorFlow,
        Library::Pandas,
        Library::Pillow,
    ];
}

/// A family-specific resolution strategy: a predicate over type identity
/// plus a builder producing the resolved schema
pub trait TypeFamilyHandler: Send + Sync {
    /// Unique handler name, used for duplicate detection and logging
    fn name(&self) -> &'static str;

    /// The library integration backing this handler
    fn library(&self) -> Library;

    /// Cheap predicate: could this source type belong to this family?
    fn matches(&self, source: &TypeExpr) -> bool;

    /// Build the resolution. `Ok(None)` means the type looked like this
    /// family but is not actually a member; errors are genuine failures.
    fn resolve(
        &self,
        source: &TypeExpr,
        annotations: &[Annotation],
        config: &ConfigDict,
        engine: &dyn SchemaEngine,
    ) -> Result<Option<Resolution>>;
}

/// Ordered collection of family handlers
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn TypeFamilyHandler>>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registry with every shipped integration, in the fixed default order:
    /// numpy, torch, tensorflow, pandas, pil
    pub fn with_defaults() -> Self {
        Self::with_available(|_| true)
    }

    /// Registry with only the integrations the probe reports available
    pub fn with_available<F>(probe: F) -> Self
    where
        F: Fn(Library) -> bool,
    {
        let mut registry = Self::new();
        for library in Library::ALL {
            if !probe(library) {
                continue;
            }
            // Names are distinct per library, registration cannot fail here
            let _ = registry.register(default_handler(library));
        }
        registry
    }

    /// Register a handler at the end of the chain
    pub fn register(&mut self, handler: Box<dyn TypeFamilyHandler>) -> Result<()> {
        if self.handlers.iter().any(|h| h.name() == handler.name()) {
            return Err(Error::DuplicateHandler {
                name: handler.name().to_string(),
            });
        }
        log::debug!(
            "registered handler '{}' for {:?}",
            handler.name(),
            handler.library()
        );
        self.handlers.push(handler);
        Ok(())
    }

    /// Registered handler names, in chain order
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Try each handler in order; first non-`None` result wins
    pub fn resolve(
        &self,
        source: &TypeExpr,
        annotations: &[Annotation],
        config: &ConfigDict,
        engine: &dyn SchemaEngine,
    ) -> Result<Option<Resolution>> {
        for handler in &self.handlers {
            if !handler.matches(source) {
                continue;
            }
            if let Some(resolution) = handler.resolve(source, annotations, config, engine)? {
                log::debug!("handler '{}' resolved type {}", handler.name(), source);
                return Ok(Some(resolution));
            }
        }
        Ok(None)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn default_handler(library: Library) -> Box<dyn TypeFamilyHandler> {
    match library {
        Library::Numpy => Box::new(NumpyArrayHandler),
        Library::Torch => Box::new(MlTensorHandler::torch()),
        Library::TensorFlow => Box::new(MlTensorHandler::tensorflow()),
        Library::Pandas => Box::new(DataframeHandler),
        Library::Pillow => Box::new(ImageHandler),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NullEngine;

    #[test]
    fn test_default_registry_order() {
        let registry = HandlerRegistry::with_defaults();
        assert_eq!(
            registry.handler_names(),
            vec!["numpy", "torch", "tensorflow", "pandas", "pil"]
        );
    }

    #[test]
    fn test_with_available_skips_missing_libraries() {
        let registry =
            HandlerRegistry::with_available(|lib| matches!(lib, Library::Numpy | Library::Pandas));
        assert_eq!(registry.handler_names(), vec!["numpy", "pandas"]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = HandlerRegistry::with_defaults();
        let err = registry
            .register(default_handler(Library::Numpy))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateHandler { ref name } if name == "numpy"));
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = HandlerRegistry::new();
        let source = TypeExpr::named("numpy", "ndarray");
        let result = registry
            .resolve(&source, &[], &ConfigDict::new(), &NullEngine)
            .unwrap();
        assert!(result.is_none());
    }
}
