//! Dataframe handler
//!
//! Resolution is idempotent: a `DataframeSchema` annotation already present
//! on the field suppresses insertion of another, so re-resolving a resolved
//! declaration is a no-op. The source type is returned unchanged as the
//! canonical type.

use crate::annotation::{Annotation, DataframeSchema};
use crate::engine::{ConfigDict, Resolution, SchemaEngine};
use crate::error::Result;
use crate::resolver::registry::{Library, TypeFamilyHandler};
use crate::types::TypeExpr;

const DATAFRAME: &str = "pandas.DataFrame";

/// Handler for `pandas.DataFrame` and subclasses
pub struct DataframeHandler;

impl TypeFamilyHandler for DataframeHandler {
    fn name(&self) -> &'static str {
        "pandas"
    }

    fn library(&self) -> Library {
        Library::Pandas
    }

    fn matches(&self, source: &TypeExpr) -> bool {
        source.origin().is_some_and(|o| o.in_namespace("pandas"))
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
        if !origin.is_subclass_of(DATAFRAME) {
            return Ok(None);
        }

        let (_, mut rest) = engine.collect_known_metadata(annotations);
        if !rest
            .iter()
            .any(|a| matches!(a, Annotation::DataframeSchema(_)))
        {
            rest.insert(0, Annotation::DataframeSchema(DataframeSchema::default()));
        }
        Ok(Some(Resolution::new(source.clone(), rest)))
    }
}
