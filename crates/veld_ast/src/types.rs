//! The Veld type lattice.
//!
//! Types are a fixed enumeration: five primitives plus the two parametrized
//! forms (array and function). Two types are the same type iff their display
//! names are equal; for this enumeration that coincides with structural
//! equality, so `PartialEq` is the comparison later phases rely on.

use std::fmt;

use serde::Serialize;

use crate::{AstError, Value};

/// A Veld type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Type {
    /// The boolean primitive, printed `boolean`.
    Boolean,
    /// The integer primitive, printed `int`.
    Int,
    /// The floating-point primitive, printed `double`.
    Double,
    /// The string primitive, printed `string`.
    Str,
    /// The unit/void primitive, printed `void`.
    Void,
    /// Array of a fixed element type, printed `[<element>]`.
    Array(Box<Type>),
    /// Function type, printed `(<p1>,<p2>,...)-><return>`.
    Function {
        /// Parameter types, in declaration order.
        parameters: Vec<Type>,
        /// Return type.
        returns: Box<Type>,
    },
}

impl Type {
    /// Creates an array type. The element is statically guaranteed to be a
    /// type, so this never fails.
    pub fn array(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    /// Creates an array type from an untyped field value, as the parser does
    /// when lowering a type annotation. Anything other than a `Value::Type`
    /// is a construction error.
    pub fn array_of(element: &Value) -> Result<Self, AstError> {
        match element {
            Value::Type(ty) => Ok(Type::array(ty.clone())),
            other => Err(AstError::InvalidArrayElement {
                found: other.kind(),
            }),
        }
    }

    /// Creates a function type.
    pub fn function(parameters: Vec<Type>, returns: Type) -> Self {
        Type::Function {
            parameters,
            returns: Box::new(returns),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("boolean"),
            Type::Int => f.write_str("int"),
            Type::Double => f.write_str("double"),
            Type::Str => f.write_str("string"),
            Type::Void => f.write_str("void"),
            Type::Array(element) => write!(f, "[{element}]"),
            Type::Function {
                parameters,
                returns,
            } => {
                f.write_str("(")?;
                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ")->{returns}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Token, TokenCategory};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Type::Boolean, "boolean")]
    #[case(Type::Int, "int")]
    #[case(Type::Double, "double")]
    #[case(Type::Str, "string")]
    #[case(Type::Void, "void")]
    #[case(Type::array(Type::Int), "[int]")]
    #[case(Type::array(Type::array(Type::Str)), "[[string]]")]
    #[case(Type::function(vec![], Type::Void), "()->void")]
    #[case(
        Type::function(vec![Type::Int, Type::Str], Type::Boolean),
        "(int,string)->boolean"
    )]
    #[case(
        Type::function(vec![Type::array(Type::Double)], Type::array(Type::Int)),
        "([double])->[int]"
    )]
    fn display_names(#[case] ty: Type, #[case] expected: &str) {
        assert_eq!(ty.to_string(), expected);
    }

    #[test]
    fn test_structural_equality_tracks_display_name() {
        let a = Type::function(vec![Type::Int], Type::Void);
        let b = Type::function(vec![Type::Int], Type::Void);
        let c = Type::function(vec![Type::Double], Type::Void);

        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, c);
        assert_ne!(a.to_string(), c.to_string());
    }

    #[test]
    fn test_array_of_type_value() {
        let ty = Type::array_of(&Value::Type(Type::Int)).unwrap();
        assert_eq!(ty, Type::array(Type::Int));
    }

    #[test]
    fn test_array_of_rejects_non_type() {
        let token = Value::Token(Token::new(TokenCategory::Number, "5"));
        let err = Type::array_of(&token).unwrap_err();
        assert!(matches!(
            err,
            AstError::InvalidArrayElement { found: "token" }
        ));
    }

    #[test]
    fn snapshot_display_names() {
        let types = [
            Type::Int,
            Type::array(Type::Int),
            Type::function(vec![Type::Int, Type::Str], Type::Boolean),
            Type::function(vec![], Type::array(Type::Void)),
        ];
        let rendered = types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(rendered, @r"
int
[int]
(int,string)->boolean
()->[void]
");
    }
}
