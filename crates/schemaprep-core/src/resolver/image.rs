//! Image handler
//!
//! Recognizes `PIL.Image.Image` and subclasses, unwrapping a generic
//! application first. The canonical type is the unwrapped origin; the only
//! change to the annotations is the prepended parameterless encoder marker.

use crate::annotation::{Annotation, PilImageEncoder};
use crate::engine::{ConfigDict, Resolution, SchemaEngine};
use crate::error::Result;
use crate::resolver::registry::{Library, TypeFamilyHandler};
use crate::types::TypeExpr;

const IMAGE: &str = "PIL.Image.Image";

/// Handler for PIL image types
pub struct ImageHandler;

impl TypeFamilyHandler for ImageHandler {
    fn name(&self) -> &'static str {
        "pil"
    }

    fn library(&self) -> Library {
        Library::Pillow
    }

    fn matches(&self, source: &TypeExpr) -> bool {
        source.origin().is_some_and(|o| o.in_namespace("PIL"))
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
        if !origin.is_subclass_of(IMAGE) {
            return Ok(None);
        }

        let (_, rest) = engine.collect_known_metadata(annotations);
        let mut resolved = Vec::with_capacity(rest.len() + 1);
        resolved.push(Annotation::PilImageEncoder(PilImageEncoder));
        resolved.extend(rest);
        Ok(Some(Resolution::new(
            TypeExpr::Named(origin.clone()),
            resolved,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NullEngine;
    use crate::types::TypeName;
    use serde_json::json;

    fn resolve(source: &TypeExpr, annotations: &[Annotation]) -> Option<Resolution> {
        ImageHandler
            .resolve(source, annotations, &ConfigDict::new(), &NullEngine)
            .unwrap()
    }

    #[test]
    fn test_encoder_prepended_annotations_untouched() {
        let source = TypeExpr::named("PIL.Image", "Image");
        let annotations = vec![Annotation::Other(json!(1)), Annotation::Other(json!(2))];
        let resolution = resolve(&source, &annotations).unwrap();

        assert_eq!(
            resolution.annotations,
            vec![
                Annotation::PilImageEncoder(PilImageEncoder),
                Annotation::Other(json!(1)),
                Annotation::Other(json!(2)),
            ]
        );
    }

    #[test]
    fn test_generic_unwrapped_to_origin() {
        let origin = TypeName::new("PIL.Image", "Image");
        let source = TypeExpr::generic(origin.clone(), vec![TypeExpr::named("typing", "Any")]);
        let resolution = resolve(&source, &[]).unwrap();
        assert_eq!(resolution.source, TypeExpr::Named(origin));
    }

    #[test]
    fn test_image_subclass_matches() {
        let source = TypeExpr::Named(
            TypeName::new("PIL.PngImagePlugin", "PngImageFile").with_base("PIL.Image.Image"),
        );
        assert!(ImageHandler.matches(&source));
        assert!(resolve(&source, &[]).is_some());
    }

    #[test]
    fn test_non_image_pil_type_is_not_applicable() {
        let source = TypeExpr::named("PIL.ImageDraw", "ImageDraw");
        assert!(resolve(&source, &[]).is_none());
    }
}
