//! Field values.

use serde::Serialize;

use crate::{NodeId, Token, Type};

/// A value stored in a node field.
///
/// Fields hold either a reference to another arena node, a leaf token, a
/// type, a primitive, or a homogeneous sequence of further values. The
/// declared shape of each field is fixed per node variant; `Value` is the
/// common currency the shapes are built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// Absent value.
    Null,
    /// Boolean primitive.
    Bool(bool),
    /// Integer primitive.
    Int(i64),
    /// Floating-point primitive.
    Float(f64),
    /// String primitive.
    Str(String),
    /// A Veld type.
    Type(Type),
    /// A leaf token.
    Token(Token),
    /// Reference to a composite node or symbol record in the arena.
    Node(NodeId),
    /// Sequence of values.
    Seq(Vec<Value>),
}

impl Value {
    /// Short name of this value's shape, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Type(_) => "type",
            Value::Token(_) => "token",
            Value::Node(_) => "node",
            Value::Seq(_) => "sequence",
        }
    }
}
