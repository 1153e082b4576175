//! # veld_ast
//!
//! AST definitions for the Veld language.
//!
//! This crate provides the node vocabulary produced by the Veld parser and
//! consumed by the later compiler phases. Nodes live in an [`AstArena`] and
//! refer to each other by [`NodeId`], so the same node can be shared between
//! fields and true reference cycles can be represented without unsafe code.
//!
//! ## Architecture
//!
//! - Composite nodes are allocated in an index arena; a `NodeId` is both the
//!   reference and the stable identity of a node
//! - Every variant declares its fields in a fixed order, exposed through
//!   [`Node::fields`], so traversal and rendering never depend on incidental
//!   storage order
//! - Leaf tokens are plain values carried inside fields; they are transparent
//!   placeholders for their resolved semantic payload
//! - Later phases attach extra fields through the arena's annotation table
//!   instead of mutating node structure
//!
//! ## Example
//!
//! ```rust
//! use veld_ast::{AstArena, Node, Token, TokenCategory, Type, Value};
//!
//! let mut arena = AstArena::new();
//!
//! let x = arena.alloc(Node::variable("x", true));
//! let decl = arena.alloc(Node::variable_declaration(
//!     Value::Type(Type::Int),
//!     Value::Node(x),
//!     Value::Token(Token::new(TokenCategory::Number, "5")),
//! ));
//! let program = arena.alloc(Node::program(vec![Value::Node(decl)]));
//!
//! assert_eq!(arena.get(program).unwrap().type_name(), "Program");
//! ```

mod arena;
mod error;
mod node;
mod span;
mod stdlib;
mod token;
mod types;
mod value;
pub mod visitor;

pub use arena::{AstArena, NodeId};
pub use error::{AstError, error};
pub use node::{FieldRef, Node};
pub use span::Span;
pub use stdlib::standard_library;
pub use token::{Token, TokenCategory};
pub use types::Type;
pub use value::Value;

// Re-export commonly used visitor items for convenience
pub use visitor::{Descend, Visitor, walk_node, walk_value};
