//! ML framework tensor handlers
//!
//! torch and tensorflow tensors resolve identically apart from the
//! namespace, the base tensor type, and the schema tag, so one handler type
//! covers both. Unlike the numeric-array handler there is no inference from
//! generic parameters: dtype and shape come only from explicit annotations.

use crate::annotation::{Annotation, TensorKind, TensorSchema};
use crate::engine::{ConfigDict, Resolution, SchemaEngine};
use crate::error::Result;
use crate::resolver::extract::split_tensor_hints;
use crate::resolver::registry::{Library, TypeFamilyHandler};
use crate::types::TypeExpr;

/// Handler for one ML framework's tensor family
pub struct MlTensorHandler {
    name: &'static str,
    library: Library,
    namespace: &'static str,
    base_type: &'static str,
    kind: TensorKind,
}

impl MlTensorHandler {
    /// Handler for `torch.Tensor` and subclasses
    pub fn torch() -> Self {
        Self {
            name: "torch",
            library: Library::Torch,
            namespace: "torch",
            base_type: "torch.Tensor",
            kind: TensorKind::TorchTensor,
        }
    }

    /// Handler for `tensorflow.Tensor` and subclasses
    pub fn tensorflow() -> Self {
        Self {
            name: "tensorflow",
            library: Library::TensorFlow,
            namespace: "tensorflow",
            base_type: "tensorflow.Tensor",
            kind: TensorKind::TfTensor,
        }
    }
}

impl TypeFamilyHandler for MlTensorHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    fn library(&self) -> Library {
        self.library
    }

    fn matches(&self, source: &TypeExpr) -> bool {
        source
            .origin()
            .is_some_and(|o| o.in_namespace(self.namespace))
    }

    fn resolve(
        &self,
        source: &TypeExpr,
        annotations: &[Annotation],
        _config: &ConfigDict,
        engine: &dyn SchemaEngine,
    ) -> Result<Option<Resolution>> {
        let Some(origin) = source.origin() else {
            return Ok(None);
        };
        if !origin.is_subclass_of(self.base_type) {
            return Ok(None);
        }

        let (_, rest) = engine.collect_known_metadata(annotations);
        let hints = split_tensor_hints(&rest);

        let mut resolved = Vec::with_capacity(hints.rest.len() + 1);
        resolved.push(Annotation::TensorSchema(TensorSchema::new(
            self.kind,
            hints.dtype,
            hints.shape,
        )));
        resolved.extend(hints.rest);
        Ok(Some(Resolution::new(source.clone(), resolved)))
    }
}
