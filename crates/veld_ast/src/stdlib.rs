//! The Veld standard library table.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::Node;

static STANDARD_LIBRARY: OnceLock<BTreeMap<&'static str, Node>> = OnceLock::new();

/// Read-only mapping from name to the pre-populated symbol record.
///
/// Built once on first use and never mutated afterwards, so it is safe to
/// read from any number of threads. The analyzer consults it when resolving
/// identifiers that no declaration binds.
pub fn standard_library() -> &'static BTreeMap<&'static str, Node> {
    STANDARD_LIBRARY.get_or_init(|| {
        BTreeMap::from([
            ("π", Node::variable("π", false)),
            ("sqrt", Node::function("sqrt", 1, true)),
            ("sin", Node::function("sin", 1, true)),
            ("cos", Node::function("cos", 1, true)),
            ("exp", Node::function("exp", 1, true)),
            ("ln", Node::function("ln", 1, true)),
            ("hypot", Node::function("hypot", 2, true)),
        ])
    })
}
