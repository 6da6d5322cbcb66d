//! Filesystem-path handler
//!
//! Path types are a fixed, closed set: the pure and concrete POSIX/Windows
//! variants plus their two bases. They are not an optional integration, and
//! they must be claimed before the engine's own resolution so that path
//! fields get file-schema treatment instead of the engine's generic default.

use crate::annotation::{Annotation, FileSchema};
use crate::engine::{ConfigDict, Resolution, SchemaEngine};
use crate::error::Result;
use crate::resolver::extract::split_content_type;
use crate::types::TypeExpr;

const PATH_TYPES: [&str; 6] = [
    "pathlib.PurePath",
    "pathlib.PurePosixPath",
    "pathlib.PureWindowsPath",
    "pathlib.Path",
    "pathlib.PosixPath",
    "pathlib.WindowsPath",
];

/// Handler for the closed set of filesystem-path types
pub struct PathTypeHandler;

impl PathTypeHandler {
    pub fn resolve(
        &self,
        source: &TypeExpr,
        annotations: &[Annotation],
        _config: &ConfigDict,
        engine: &dyn SchemaEngine,
    ) -> Result<Option<Resolution>> {
        let TypeExpr::Named(name) = source else {
            return Ok(None);
        };
        if !PATH_TYPES.iter().any(|t| name.is(t)) {
            return Ok(None);
        }

        let (_, rest) = engine.collect_known_metadata(annotations);
        let (content_type, rest) = split_content_type(&rest);

        let mut resolved = Vec::with_capacity(rest.len() + 1);
        resolved.push(Annotation::FileSchema(FileSchema::new(content_type)));
        resolved.extend(rest);
        Ok(Some(Resolution::new(source.clone(), resolved)))
    }
}
