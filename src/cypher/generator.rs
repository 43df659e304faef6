//! Two-pass Cypher statement generation.

use std::collections::HashSet;

use super::{ConstraintEncoding, Statement};
use crate::graph::DependencyGraph;

/// Walks the graph and produces the ordered statement sequence.
///
/// Generation is two passes over the graph's insertion order: first one
/// `CREATE` statement per package (labeled `RootPackage` when the name is
/// in `roots`, `Package` otherwise), then one `MATCH ... CREATE` statement
/// per declared requirement, in requirement-list order. Every node
/// statement precedes every relationship statement because relationship
/// statements match their destination by the `Package` label, which must
/// already exist.
///
/// Dangling requirements still emit a relationship statement; at execution
/// time it matches zero destination nodes and is inert.
///
/// Name and version are interpolated verbatim, with no escaping of
/// embedded quote characters.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use deps2neo::cypher::{build_statements, ConstraintEncoding};
/// use deps2neo::graph::{DependencyGraph, Requirement};
///
/// let mut graph = DependencyGraph::new();
/// graph.add_package("a", "1.0");
/// graph.add_package("b", "1.0");
/// graph.add_requirement("a", Requirement::new("b", vec![">=1.0".to_string()]));
///
/// let statements = build_statements(&graph, &graph.roots(), ConstraintEncoding::List);
/// assert_eq!(statements.len(), 3);
/// assert_eq!(
///     statements[0].as_str(),
///     "CREATE (n:RootPackage {name:'a', version:'1.0'});"
/// );
/// ```
pub fn build_statements(
    graph: &DependencyGraph,
    roots: &HashSet<String>,
    encoding: ConstraintEncoding,
) -> Vec<Statement> {
    let mut statements = Vec::with_capacity(graph.node_count() + graph.requirement_count());

    for node in graph.packages() {
        let label = if roots.contains(&node.name) {
            "RootPackage"
        } else {
            "Package"
        };
        statements.push(Statement::new(format!(
            "CREATE (n:{} {{name:'{}', version:'{}'}});",
            label, node.name, node.version
        )));
    }

    for node in graph.packages() {
        for requirement in &node.requirements {
            statements.push(Statement::new(format!(
                "MATCH (src), (dst:Package) WHERE src.name = '{}' AND dst.name = '{}' \
                 CREATE (src)-[:provided {{{}}}]->(dst);",
                node.name,
                requirement.target,
                encoding.encode(&requirement.constraints)
            )));
        }
    }

    statements
}
