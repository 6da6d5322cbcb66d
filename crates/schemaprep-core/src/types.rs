//! Descriptions of foreign declared field types
//!
//! The resolver never links against the libraries whose types it recognizes.
//! A field's declared type reaches us as a [`TypeExpr`]: a module-qualified
//! name, optionally applied to generic arguments, with the ancestry the host
//! reported for it. Subclass and namespace checks operate on these
//! descriptions only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A module-qualified type name with its reported ancestry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeName {
    /// Module path, e.g. `numpy` or `PIL.Image`
    pub module: String,
    /// Unqualified type name, e.g. `ndarray`
    pub name: String,
    /// Fully-qualified ancestor names, nearest first
    pub bases: Vec<String>,
}

impl TypeName {
    /// Create a type name with no known ancestors
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
            bases: Vec::new(),
        }
    }

    /// Add a fully-qualified ancestor name
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// The fully-qualified name, `module.name`
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.module, self.name)
    }

    /// Whether this is exactly the given fully-qualified type
    pub fn is(&self, qualified: &str) -> bool {
        match qualified.rsplit_once('.') {
            Some((module, name)) => self.module == module && self.name == name,
            None => false,
        }
    }

    /// Whether this type is the given type or lists it among its ancestors
    pub fn is_subclass_of(&self, qualified: &str) -> bool {
        self.is(qualified) || self.bases.iter().any(|b| b == qualified)
    }

    /// Whether the defining module is `prefix` itself or nested inside it
    pub fn in_namespace(&self, prefix: &str) -> bool {
        self.module == prefix
            || self
                .module
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('.'))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.name)
    }
}

/// A declared field type, as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeExpr {
    /// A plain named type, e.g. `pandas.DataFrame`
    Named(TypeName),
    /// A generic application, e.g. `numpy.ndarray[numpy.dtype[numpy.float32]]`
    Generic {
        origin: TypeName,
        args: Vec<TypeExpr>,
    },
    /// A type value the host could not reduce to a stable, indexable identity
    Opaque,
}

impl TypeExpr {
    /// Shorthand for a plain named type
    pub fn named(module: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Named(TypeName::new(module, name))
    }

    /// Shorthand for a generic application
    pub fn generic(origin: TypeName, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Generic { origin, args }
    }

    /// Whether the host can index this type for annotation lookup.
    ///
    /// Opaque types have no stable identity; a generic inherits opacity
    /// from any of its arguments.
    pub fn is_hashable(&self) -> bool {
        match self {
            TypeExpr::Named(_) => true,
            TypeExpr::Generic { args, .. } => args.iter().all(TypeExpr::is_hashable),
            TypeExpr::Opaque => false,
        }
    }

    /// The origin name: the type itself for named types, the applied type
    /// for generics, nothing for opaque values
    pub fn origin(&self) -> Option<&TypeName> {
        match self {
            TypeExpr::Named(name) => Some(name),
            TypeExpr::Generic { origin, .. } => Some(origin),
            TypeExpr::Opaque => None,
        }
    }

    /// Generic arguments, empty for non-generic types
    pub fn args(&self) -> &[TypeExpr] {
        match self {
            TypeExpr::Generic { args, .. } => args,
            _ => &[],
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => write!(f, "{name}"),
            TypeExpr::Generic { origin, args } => {
                write!(f, "{origin}[")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, "]")
            }
            TypeExpr::Opaque => write!(f, "<opaque>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        let name = TypeName::new("numpy", "ndarray");
        assert_eq!(name.qualified(), "numpy.ndarray");
        assert!(name.is("numpy.ndarray"));
        assert!(!name.is("numpy.dtype"));
        assert!(!name.is("ndarray"));
    }

    #[test]
    fn test_is_handles_nested_modules() {
        let name = TypeName::new("PIL.Image", "Image");
        assert!(name.is("PIL.Image.Image"));
        assert!(!name.is("PIL.Image"));
    }

    #[test]
    fn test_subclass_check() {
        let custom = TypeName::new("mymodels", "MaskedTensor").with_base("torch.Tensor");
        assert!(custom.is_subclass_of("torch.Tensor"));
        assert!(!custom.is_subclass_of("tensorflow.Tensor"));

        let direct = TypeName::new("torch", "Tensor");
        assert!(direct.is_subclass_of("torch.Tensor"));
    }

    #[test]
    fn test_namespace_check() {
        assert!(TypeName::new("numpy", "ndarray").in_namespace("numpy"));
        assert!(TypeName::new("numpy.typing", "NDArray").in_namespace("numpy"));
        // "numpyish" is a different top-level module
        assert!(!TypeName::new("numpyish", "ndarray").in_namespace("numpy"));
    }

    #[test]
    fn test_hashability() {
        let named = TypeExpr::named("pandas", "DataFrame");
        assert!(named.is_hashable());

        let generic = TypeExpr::generic(
            TypeName::new("numpy", "ndarray"),
            vec![TypeExpr::named("numpy", "float32")],
        );
        assert!(generic.is_hashable());

        let poisoned = TypeExpr::generic(TypeName::new("numpy", "ndarray"), vec![TypeExpr::Opaque]);
        assert!(!poisoned.is_hashable());
        assert!(!TypeExpr::Opaque.is_hashable());
    }

    #[test]
    fn test_origin() {
        let generic = TypeExpr::generic(
            TypeName::new("torch", "Tensor"),
            vec![TypeExpr::named("typing", "Any")],
        );
        assert_eq!(generic.origin().unwrap().qualified(), "torch.Tensor");
        assert_eq!(TypeExpr::Opaque.origin(), None);
    }

    #[test]
    fn test_display() {
        let generic = TypeExpr::generic(
            TypeName::new("numpy", "ndarray"),
            vec![TypeExpr::named("numpy", "float32")],
        );
        assert_eq!(generic.to_string(), "numpy.ndarray[numpy.float32]");
    }
}
