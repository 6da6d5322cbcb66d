//! Numeric-array handler
//!
//! The only handler that infers an element type from the source type itself.
//! `numpy.ndarray[...]` carries its element type as a generic argument,
//! either wrapped (`numpy.dtype[numpy.float32]`) or bare (`numpy.float32`);
//! the name is funneled through the numpy alias table so `double` and
//! `float64` describe the same schema. An element-type argument the table
//! does not recognize makes the whole type not applicable rather than
//! failing schema construction.

use crate::annotation::{Annotation, TensorKind, TensorSchema};
use crate::engine::{ConfigDict, Resolution, SchemaEngine};
use crate::error::{Error, Result};
use crate::resolver::extract::split_tensor_hints;
use crate::resolver::registry::{Library, TypeFamilyHandler};
use crate::types::TypeExpr;

const NDARRAY: &str = "numpy.ndarray";
const DTYPE: &str = "numpy.dtype";

/// Handler for `numpy.ndarray` and its parametrized forms
pub struct NumpyArrayHandler;

impl TypeFamilyHandler for NumpyArrayHandler {
    fn name(&self) -> &'static str {
        "numpy"
    }

    fn library(&self) -> Library {
        Library::Numpy
    }

    fn matches(&self, source: &TypeExpr) -> bool {
        source.origin().is_some_and(|o| o.in_namespace("numpy"))
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
        if !origin.is(NDARRAY) {
            return Ok(None);
        }

        let inferred = match source.args().first() {
            None => None,
            Some(arg) => match element_type_name(arg) {
                Some(name) => Some(name),
                // Malformed element-type spec: not this handler's type
                None => return Ok(None),
            },
        };

        let (_, rest) = engine.collect_known_metadata(annotations);
        let hints = split_tensor_hints(&rest);

        let dtype = match (inferred, hints.dtype) {
            (Some(inferred), Some(declared)) if inferred != declared => {
                return Err(Error::ConflictingDType { inferred, declared });
            }
            (_, Some(declared)) => Some(declared),
            (inferred, None) => inferred,
        };

        let mut resolved = Vec::with_capacity(hints.rest.len() + 1);
        resolved.push(Annotation::TensorSchema(TensorSchema::new(
            TensorKind::NumpyArray,
            dtype,
            hints.shape,
        )));
        resolved.extend(hints.rest);
        Ok(Some(Resolution::new(source.clone(), resolved)))
    }
}

/// Canonical element-type name for a generic argument, `None` if malformed
fn element_type_name(arg: &TypeExpr) -> Option<String> {
    match arg {
        TypeExpr::Generic { origin, args } if origin.is(DTYPE) => match args.first() {
            Some(TypeExpr::Named(scalar)) => canonical_dtype(&scalar.name),
            _ => None,
        },
        TypeExpr::Named(scalar) => canonical_dtype(&scalar.name),
        _ => None,
    }
}

/// Map a numpy scalar-type name or alias to its canonical dtype name
fn canonical_dtype(name: &str) -> Option<String> {
    let canonical = match name {
        "bool" | "bool_" => "bool",
        "int8" | "byte" => "int8",
        "int16" | "short" => "int16",
        "int32" | "intc" => "int32",
        "int64" | "int_" | "int" | "long" | "intp" => "int64",
        "uint8" | "ubyte" => "uint8",
        "uint16" | "ushort" => "uint16",
        "uint32" | "uintc" => "uint32",
        "uint64" | "uint" | "ulong" | "uintp" => "uint64",
        "float16" | "half" => "float16",
        "float32" | "single" => "float32",
        "float64" | "float" | "float_" | "double" => "float64",
        "complex64" | "csingle" => "complex64",
        "complex128" | "complex" | "complex_" | "cdouble" => "complex128",
        "str_" | "str" | "unicode" => "str",
        "bytes_" | "bytes" => "bytes",
        _ => return None,
    };
    Some(canonical.to_string())
}
