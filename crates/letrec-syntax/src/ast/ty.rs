//! Source-level type annotations.

use std::fmt;

/// A type annotation as written on a `proc` parameter or a `letrec`.
///
/// Only the two base types and the unknown marker exist in the surface
/// syntax. Procedure types are never written, only inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `?`, to be filled in by inference
    Unknown,
}

impl Type {
    /// Parses an annotation name. `?` is punctuation and handled by the parser.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Type> {
        match name {
            "int" => Some(Type::Int),
            "bool" => Some(Type::Bool),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => f.write_str("int"),
            Type::Bool => f.write_str("bool"),
            Type::Unknown => f.write_str("?"),
        }
    }
}
