//! Parser for installed-package manifests.
//!
//! This module deserializes a package manager's JSON manifest (a mapping
//! from package key to name/version/depends record) and turns it into the
//! canonical [`DependencyGraph`].

use std::fs;
use std::path::Path;

use super::types::{Manifest, ManifestEntry};
use super::SpecifierFormat;
use crate::graph::DependencyGraph;

/// Errors that can occur while obtaining or parsing a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Failed to read the manifest source.
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest is not valid JSON.
    #[error("Failed to parse manifest JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// One manifest entry does not match the expected record shape.
    #[error("Invalid manifest entry '{key}': {source}")]
    InvalidEntry {
        key: String,
        source: serde_json::Error,
    },

    /// The manifest contains no packages.
    #[error("Manifest contains no packages")]
    EmptyManifest,

    /// A dependency specifier has no name token.
    #[error("Malformed dependency specifier: '{0}'")]
    MalformedSpecifier(String),
}

/// Result type alias for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Parses a manifest from a file path.
pub fn parse_file(path: &Path) -> ManifestResult<Manifest> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a manifest from a JSON string.
///
/// The top level must be an object mapping package keys to entries with at
/// least `name` and `version` fields; `depends` defaults to empty. Entry
/// order follows the document's own key order, so parsing the same input
/// twice yields manifests equal in content and order.
///
/// # Example
///
/// ```
/// use deps2neo::parser::parse_str;
///
/// let json = r#"{
///     "numpy-1.26.4-py312": {"name": "numpy", "version": "1.26.4", "depends": ["python >=3.9"]}
/// }"#;
/// let manifest = parse_str(json).unwrap();
/// assert_eq!(manifest.len(), 1);
/// ```
pub fn parse_str(content: &str) -> ManifestResult<Manifest> {
    // serde_json's preserve_order feature keeps the document's key order.
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;

    let mut entries = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let entry: ManifestEntry = serde_json::from_value(value)
            .map_err(|source| ManifestError::InvalidEntry {
                key: key.clone(),
                source,
            })?;
        entries.push((key, entry));
    }

    Ok(Manifest::from_entries(entries))
}

/// Builds the canonical dependency graph from a parsed manifest.
///
/// The graph is keyed by each entry's `name` field, not by the raw package
/// key. Packages are inserted first, in manifest order, then every raw
/// specifier is split according to `format` and recorded as a requirement;
/// requirements whose target is itself an installed package become edges,
/// dangling ones are kept on the owning node only.
///
/// # Errors
///
/// Fails with [`ManifestError::MalformedSpecifier`] on the first specifier
/// without a name token. The whole run aborts; no partial graph is
/// returned.
pub fn build_graph(manifest: &Manifest, format: SpecifierFormat) -> ManifestResult<DependencyGraph> {
    let mut graph = DependencyGraph::with_capacity(manifest.len(), manifest.len());

    for (_, entry) in manifest.iter() {
        graph.add_package(&entry.name, &entry.version);
    }

    for (_, entry) in manifest.iter() {
        for raw in &entry.depends {
            let requirement = format.parse(raw)?;
            graph.add_requirement(&entry.name, requirement);
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_MANIFEST: &str = r#"{
        "pandas-2.2.0-py312": {
            "name": "pandas",
            "version": "2.2.0",
            "depends": ["numpy >=1.22.4,<2", "python-dateutil >=2.8.2"]
        },
        "numpy-1.26.4-py312": {
            "name": "numpy",
            "version": "1.26.4",
            "depends": ["python >=3.9"]
        },
        "python-dateutil-2.8.2-pyhd8ed1ab_0": {
            "name": "python-dateutil",
            "version": "2.8.2",
            "depends": []
        }
    }"#;

    #[test]
    fn test_parse_str_valid() {
        let manifest = parse_str(SAMPLE_MANIFEST).unwrap();

        assert_eq!(manifest.len(), 3);
        let (key, entry) = manifest.iter().next().unwrap();
        assert_eq!(key, "pandas-2.2.0-py312");
        assert_eq!(entry.name, "pandas");
        assert_eq!(entry.depends.len(), 2);
    }

    #[test]
    fn test_parse_str_preserves_order() {
        let manifest = parse_str(SAMPLE_MANIFEST).unwrap();

        let names: Vec<&str> = manifest.iter().map(|(_, e)| e.name.as_str()).collect();
        assert_eq!(names, vec!["pandas", "numpy", "python-dateutil"]);
    }

    #[test]
    fn test_parse_str_idempotent() {
        let first = parse_str(SAMPLE_MANIFEST).unwrap();
        let second = parse_str(SAMPLE_MANIFEST).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_str_empty_object() {
        let manifest = parse_str("{}").unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_parse_str_invalid_json() {
        let result = parse_str("{ not json }");
        assert!(matches!(result.unwrap_err(), ManifestError::Json(_)));
    }

    #[test]
    fn test_parse_str_invalid_entry() {
        let json = r#"{"broken-1.0": {"version": "1.0"}}"#;
        let result = parse_str(json);

        match result.unwrap_err() {
            ManifestError::InvalidEntry { key, .. } => assert_eq!(key, "broken-1.0"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_MANIFEST.as_bytes()).unwrap();

        let manifest = parse_file(file.path()).unwrap();
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file(Path::new("/nonexistent/manifest.json"));
        assert!(matches!(result.unwrap_err(), ManifestError::Io(_)));
    }

    #[test]
    fn test_build_graph_basic() {
        let manifest = parse_str(SAMPLE_MANIFEST).unwrap();
        let graph = build_graph(&manifest, SpecifierFormat::CommaSeparated).unwrap();

        assert_eq!(graph.node_count(), 3);
        // "python" is not installed, so only two requirements resolve.
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.requirement_count(), 3);

        let pandas = graph.get_node("pandas").unwrap();
        assert_eq!(pandas.requirements[0].target, "numpy");
        assert_eq!(pandas.requirements[0].constraints, vec![">=1.22.4", "<2"]);
    }

    #[test]
    fn test_build_graph_keyed_by_name_not_key() {
        let manifest = parse_str(SAMPLE_MANIFEST).unwrap();
        let graph = build_graph(&manifest, SpecifierFormat::CommaSeparated).unwrap();

        assert!(graph.get_node("pandas").is_some());
        assert!(graph.get_node("pandas-2.2.0-py312").is_none());
    }

    #[test]
    fn test_build_graph_roots() {
        let manifest = parse_str(SAMPLE_MANIFEST).unwrap();
        let graph = build_graph(&manifest, SpecifierFormat::CommaSeparated).unwrap();

        let roots = graph.roots();
        assert_eq!(roots.len(), 1);
        assert!(roots.contains("pandas"));
    }

    #[test]
    fn test_build_graph_malformed_specifier_fails_fast() {
        let json = r#"{
            "a-1.0": {"name": "a", "version": "1.0", "depends": ["  "]}
        }"#;
        let manifest = parse_str(json).unwrap();
        let result = build_graph(&manifest, SpecifierFormat::CommaSeparated);

        assert!(matches!(
            result.unwrap_err(),
            ManifestError::MalformedSpecifier(_)
        ));
    }

    #[test]
    fn test_build_graph_empty_manifest() {
        let manifest = parse_str("{}").unwrap();
        let graph = build_graph(&manifest, SpecifierFormat::CommaSeparated).unwrap();

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.requirement_count(), 0);
    }

    #[test]
    fn test_build_graph_idempotent() {
        let manifest = parse_str(SAMPLE_MANIFEST).unwrap();
        let first = build_graph(&manifest, SpecifierFormat::CommaSeparated).unwrap();
        let second = build_graph(&manifest, SpecifierFormat::CommaSeparated).unwrap();

        let first_nodes: Vec<_> = first.packages().collect();
        let second_nodes: Vec<_> = second.packages().collect();
        assert_eq!(first_nodes, second_nodes);
    }
}
