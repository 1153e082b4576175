//! # veld_dump
//!
//! Deterministic, cycle-safe textual dump of Veld node graphs.
//!
//! [`dump`] renders every composite node reachable from a root as one line
//! of the form
//!
//! ```text
//!    1 | Program statements=[#2]
//!    2 | VariableDeclaration type=int variable=#3 initializer=(number,"5")
//!    3 | Variable name="x" mutable=true
//! ```
//!
//! Nodes are numbered in first-discovery order of a depth-first walk over
//! declared fields. Wherever an already-numbered node recurs — because it is
//! shared or because the graph is cyclic — the reference is rendered as
//! `#<tag>` instead of being expanded again, so the output is finite and
//! identical across calls on the same graph. The output exists for debugging
//! and golden-file tests; nothing parses it back.

use std::collections::HashMap;
use std::fmt::Write as _;

use tracing::debug;
use veld_ast::{AstArena, Descend, FieldRef, Node, NodeId, Value, Visitor, walk_node};

/// Renders the node graph reachable from `root` as stable diagnostic text.
///
/// The dump is a pure function of the graph's reachable structure: two calls
/// on an unchanged graph produce identical output. The arena must not be
/// mutated while a dump is in progress.
pub fn dump(arena: &AstArena, root: NodeId) -> String {
    let mut tagger = Tagger::default();
    walk_node(&mut tagger, arena, root);
    debug!(nodes = tagger.order.len(), "node graph discovery complete");

    let renderer = Renderer { tags: &tagger.tags };
    let mut out = String::new();
    for (index, id) in tagger.order.iter().enumerate() {
        let Some(node) = arena.get(*id) else {
            continue;
        };
        if index > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{:>4} | {}", index + 1, node.type_name());
        for (name, field) in node.fields() {
            let _ = write!(out, " {name}={}", renderer.field(&field));
        }
        for (name, value) in arena.annotations(*id) {
            let _ = write!(out, " {name}={}", renderer.view(value));
        }
    }
    out
}

/// Discovery phase: assigns tags 1..N in preorder and refuses to descend
/// into a node twice, which is what terminates cycles.
#[derive(Default)]
struct Tagger {
    tags: HashMap<NodeId, usize>,
    order: Vec<NodeId>,
}

impl Visitor for Tagger {
    fn visit_node(&mut self, id: NodeId, _node: &Node) -> Descend {
        if self.tags.contains_key(&id) {
            return Descend::No;
        }
        self.tags.insert(id, self.tags.len() + 1);
        self.order.push(id);
        Descend::Yes
    }
}

/// Render phase: turns field values into their compact views.
struct Renderer<'a> {
    tags: &'a HashMap<NodeId, usize>,
}

impl Renderer<'_> {
    fn field(&self, field: &FieldRef<'_>) -> String {
        match field {
            FieldRef::One(value) => self.view(value),
            FieldRef::Opt(Some(value)) => self.view(value),
            FieldRef::Opt(None) => "null".to_string(),
            FieldRef::Many(values) => self.seq(values),
            FieldRef::Owned(value) => self.view(value),
        }
    }

    fn view(&self, value: &Value) -> String {
        match value {
            Value::Node(id) => match self.tags.get(id) {
                Some(tag) => format!("#{tag}"),
                // Only possible when a field holds an id the arena does not
                // know; render a marker instead of failing.
                None => format!("<node {id}>"),
            },
            Value::Token(token) => format!("({},{:?})", token.category, token.lexeme),
            Value::Seq(values) => self.seq(values),
            Value::Type(ty) => ty.to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(value) => value.to_string(),
            Value::Int(value) => value.to_string(),
            Value::Float(value) => format!("{value:?}"),
            Value::Str(value) => format!("{value:?}"),
        }
    }

    fn seq(&self, values: &[Value]) -> String {
        let views: Vec<String> = values.iter().map(|value| self.view(value)).collect();
        format!("[{}]", views.join(","))
    }
}
