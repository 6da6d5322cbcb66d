//! Annotations and the schema markers resolution produces
//!
//! A field declaration carries an ordered list of [`Annotation`]s. Only a
//! small subset is semantic to this crate: [`Shape`], [`DType`], and
//! [`ContentType`] hints supplied by the caller. Resolution consumes those
//! hints and prepends at most one schema marker ([`TensorSchema`],
//! [`DataframeSchema`], [`PilImageEncoder`], or [`FileSchema`]) for the
//! engine's downstream validation and serialization machinery. Everything
//! else passes through untouched as [`Annotation::Other`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single dimension of a tensor shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dim {
    /// Fixed extent
    Fixed(u64),
    /// Wildcard, any extent accepted
    Any,
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Fixed(n) => write!(f, "{n}"),
            Dim::Any => write!(f, "*"),
        }
    }
}

/// Caller-supplied dimensionality hint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    /// Ordered dimensions, outermost first
    pub dims: Vec<Dim>,
}

impl Shape {
    pub fn new(dims: Vec<Dim>) -> Self {
        Self { dims }
    }

    /// Shorthand for a shape of fixed extents only
    pub fn fixed<I: IntoIterator<Item = u64>>(dims: I) -> Self {
        Self {
            dims: dims.into_iter().map(Dim::Fixed).collect(),
        }
    }
}

/// Caller-supplied element-type hint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DType {
    /// Element-type name, e.g. `float32`
    pub name: String,
}

impl DType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Caller-supplied content-type hint for file-valued fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentType {
    /// MIME-like string, e.g. `application/pdf`
    pub media_type: String,
}

impl ContentType {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
        }
    }
}

/// Which tensor family a [`TensorSchema`] describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TensorKind {
    #[serde(rename = "numpy-array")]
    NumpyArray,
    #[serde(rename = "torch-tensor")]
    TorchTensor,
    #[serde(rename = "tf-tensor")]
    TfTensor,
}

impl fmt::Display for TensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorKind::NumpyArray => write!(f, "numpy-array"),
            TensorKind::TorchTensor => write!(f, "torch-tensor"),
            TensorKind::TfTensor => write!(f, "tf-tensor"),
        }
    }
}

/// Schema marker for tensor-valued fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TensorSchema {
    pub kind: TensorKind,
    /// Element-type name, unset when neither inferred nor declared
    pub dtype: Option<String>,
    /// Expected dimensionality, unset when undeclared
    pub shape: Option<Shape>,
}

impl TensorSchema {
    pub fn new(kind: TensorKind, dtype: Option<String>, shape: Option<Shape>) -> Self {
        Self { kind, dtype, shape }
    }
}

/// Serialization orientation for dataframe-valued fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataframeOrient {
    #[default]
    Records,
    Columns,
}

/// Schema marker for dataframe-valued fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DataframeSchema {
    pub orient: DataframeOrient,
    /// Expected column names, unset when unconstrained
    pub columns: Option<Vec<String>>,
}

/// Schema marker for image-valued fields; carries no parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PilImageEncoder;

/// Schema marker for file- and path-valued fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileSchema {
    /// Wire format, `binary` unless overridden downstream
    pub format: String,
    /// MIME-like content type, unset when undeclared
    pub content_type: Option<String>,
}

impl FileSchema {
    pub fn new(content_type: Option<String>) -> Self {
        Self {
            format: "binary".to_string(),
            content_type,
        }
    }
}

impl Default for FileSchema {
    fn default() -> Self {
        Self::new(None)
    }
}

/// A single metadata entry attached to a field declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Annotation {
    Shape(Shape),
    DType(DType),
    ContentType(ContentType),
    TensorSchema(TensorSchema),
    DataframeSchema(DataframeSchema),
    PilImageEncoder(PilImageEncoder),
    FileSchema(FileSchema),
    /// Metadata this crate does not interpret, passed through untouched
    Other(Value),
}

impl Annotation {
    /// Shorthand for a shape hint of fixed extents
    pub fn shape<I: IntoIterator<Item = u64>>(dims: I) -> Self {
        Annotation::Shape(Shape::fixed(dims))
    }

    /// Shorthand for an element-type hint
    pub fn dtype(name: impl Into<String>) -> Self {
        Annotation::DType(DType::new(name))
    }

    /// Shorthand for a content-type hint
    pub fn content_type(media_type: impl Into<String>) -> Self {
        Annotation::ContentType(ContentType::new(media_type))
    }

    /// Whether this annotation is one of the schema markers resolution
    /// produces
    pub fn is_schema_marker(&self) -> bool {
        matches!(
            self,
            Annotation::TensorSchema(_)
                | Annotation::DataframeSchema(_)
                | Annotation::PilImageEncoder(_)
                | Annotation::FileSchema(_)
        )
    }
}
