//! Declared-order traversal of the node graph.
//!
//! [`walk_node`] visits arena nodes in preorder, recursing through declared
//! fields in declaration order, through sequence fields element by element,
//! through annotation values in insertion order, and through a token's
//! resolved payload (tokens themselves are transparent). Primitive values
//! and types are never descended into.
//!
//! The visitor decides whether a node's fields are walked. On a graph with
//! shared nodes or cycles the visitor must return [`Descend::No`] for nodes
//! it has already seen, otherwise the walk will not terminate. This is what
//! lets a single walk implementation serve both plain trees and the general
//! graphs the analyzer produces.
//!
//! # Example
//!
//! ```rust
//! use veld_ast::{AstArena, Descend, Node, NodeId, Value, Visitor, walk_node};
//!
//! struct Names(Vec<&'static str>);
//!
//! impl Visitor for Names {
//!     fn visit_node(&mut self, _id: NodeId, node: &Node) -> Descend {
//!         self.0.push(node.type_name());
//!         Descend::Yes
//!     }
//! }
//!
//! let mut arena = AstArena::new();
//! let ret = arena.alloc(Node::return_statement(Value::Int(0)));
//! let program = arena.alloc(Node::program(vec![Value::Node(ret)]));
//!
//! let mut names = Names(Vec::new());
//! walk_node(&mut names, &arena, program);
//! assert_eq!(names.0, ["Program", "ReturnStatement"]);
//! ```

use crate::{AstArena, FieldRef, Node, NodeId, Value};

/// Whether the walk should descend into the visited node's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    /// Walk the node's declared fields and annotations.
    Yes,
    /// Skip the node's contents.
    No,
}

/// Read-only visitor over arena nodes.
pub trait Visitor {
    /// Called once per node encounter, before its fields are walked.
    fn visit_node(&mut self, id: NodeId, node: &Node) -> Descend;
}

/// Walks the node with the given id, then (if the visitor allows) its
/// declared fields and annotations. Ids the arena does not know are skipped.
pub fn walk_node<V: Visitor>(visitor: &mut V, arena: &AstArena, id: NodeId) {
    let Some(node) = arena.get(id) else {
        return;
    };
    if visitor.visit_node(id, node) == Descend::No {
        return;
    }
    for (_, field) in node.fields() {
        match field {
            FieldRef::One(value) => walk_value(visitor, arena, value),
            FieldRef::Opt(Some(value)) => walk_value(visitor, arena, value),
            FieldRef::Opt(None) => {}
            FieldRef::Many(values) => {
                for value in values {
                    walk_value(visitor, arena, value);
                }
            }
            FieldRef::Owned(value) => walk_value(visitor, arena, &value),
        }
    }
    for (_, value) in arena.annotations(id) {
        walk_value(visitor, arena, value);
    }
}

/// Walks a single field value: node references are followed, sequences are
/// walked element by element, resolved tokens stand in for their payload,
/// and everything else is inert.
pub fn walk_value<V: Visitor>(visitor: &mut V, arena: &AstArena, value: &Value) {
    match value {
        Value::Node(id) => walk_node(visitor, arena, *id),
        Value::Token(token) => {
            if let Some(payload) = &token.resolved {
                walk_value(visitor, arena, payload);
            }
        }
        Value::Seq(values) => {
            for value in values {
                walk_value(visitor, arena, value);
            }
        }
        _ => {}
    }
}
