//! Dependency specifier splitting.
//!
//! Package managers declare dependencies as single-line specifiers that
//! combine a target name with optional version constraints. Two textual
//! layouts are in use, so the split is selected by [`SpecifierFormat`]
//! rather than duplicated per source.

use super::ManifestError;
use crate::graph::Requirement;

/// The textual layout of version constraints inside a raw specifier.
///
/// Both layouts put the target package name first, separated from the
/// constraints by whitespace. They differ in how multiple constraints are
/// delimited after that:
///
/// - [`CommaSeparated`](Self::CommaSeparated): constraints are joined by
///   commas within a whitespace-delimited field, e.g.
///   `"numpy >=1.0,<2.0"`.
/// - [`WhitespaceSeparated`](Self::WhitespaceSeparated): every
///   whitespace-delimited field after the name is one constraint, e.g.
///   `"numpy >=1.0 <2.0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierFormat {
    /// Comma-joined constraints within one field.
    CommaSeparated,
    /// One constraint per whitespace-delimited field.
    WhitespaceSeparated,
}

impl SpecifierFormat {
    /// Splits a raw specifier into a [`Requirement`].
    ///
    /// The first whitespace-delimited token is the target package name;
    /// the remainder is decomposed into constraint tokens according to the
    /// format. Constraints stay opaque strings; they are never parsed into
    /// comparator and version parts.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MalformedSpecifier`] when the specifier
    /// has no name token (empty or whitespace-only).
    ///
    /// # Example
    ///
    /// ```
    /// use deps2neo::parser::SpecifierFormat;
    ///
    /// let req = SpecifierFormat::CommaSeparated
    ///     .parse("numpy >=1.0,<2.0")
    ///     .unwrap();
    /// assert_eq!(req.target, "numpy");
    /// assert_eq!(req.constraints, vec![">=1.0", "<2.0"]);
    /// ```
    pub fn parse(&self, raw: &str) -> Result<Requirement, ManifestError> {
        let mut fields = raw.split_whitespace();
        let target = fields
            .next()
            .ok_or_else(|| ManifestError::MalformedSpecifier(raw.to_string()))?;

        let constraints: Vec<String> = match self {
            SpecifierFormat::CommaSeparated => fields
                .flat_map(|field| field.split(','))
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
            SpecifierFormat::WhitespaceSeparated => fields.map(str::to_string).collect(),
        };

        Ok(Requirement {
            target: target.to_string(),
            constraints,
        })
    }
}

impl std::str::FromStr for SpecifierFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" => Ok(SpecifierFormat::CommaSeparated),
            "space" => Ok(SpecifierFormat::WhitespaceSeparated),
            _ => Err(format!(
                "Unknown specifier format: '{}'. Valid formats: comma, space",
                s
            )),
        }
    }
}

impl std::fmt::Display for SpecifierFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecifierFormat::CommaSeparated => write!(f, "comma"),
            SpecifierFormat::WhitespaceSeparated => write!(f, "space"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_format_single_constraint() {
        let req = SpecifierFormat::CommaSeparated.parse("numpy >=1.0").unwrap();

        assert_eq!(req.target, "numpy");
        assert_eq!(req.constraints, vec![">=1.0"]);
    }

    #[test]
    fn test_comma_format_multiple_constraints() {
        let req = SpecifierFormat::CommaSeparated
            .parse("python >=3.6,<3.7.0a0")
            .unwrap();

        assert_eq!(req.target, "python");
        assert_eq!(req.constraints, vec![">=3.6", "<3.7.0a0"]);
    }

    #[test]
    fn test_comma_format_constraints_across_fields() {
        // Some managers emit both separators in one specifier.
        let req = SpecifierFormat::CommaSeparated
            .parse("openssl >=1.1.1,<1.1.2 !=1.1.1e")
            .unwrap();

        assert_eq!(req.target, "openssl");
        assert_eq!(req.constraints, vec![">=1.1.1", "<1.1.2", "!=1.1.1e"]);
    }

    #[test]
    fn test_comma_format_drops_empty_tokens() {
        let req = SpecifierFormat::CommaSeparated.parse("numpy >=1.0,").unwrap();

        assert_eq!(req.constraints, vec![">=1.0"]);
    }

    #[test]
    fn test_space_format_multiple_constraints() {
        let req = SpecifierFormat::WhitespaceSeparated
            .parse("libgcc-ng >=7.3.0 <8.0a0")
            .unwrap();

        assert_eq!(req.target, "libgcc-ng");
        assert_eq!(req.constraints, vec![">=7.3.0", "<8.0a0"]);
    }

    #[test]
    fn test_space_format_keeps_commas_verbatim() {
        // In the whitespace layout a comma is part of the constraint token.
        let req = SpecifierFormat::WhitespaceSeparated
            .parse("numpy >=1.0,<2.0")
            .unwrap();

        assert_eq!(req.constraints, vec![">=1.0,<2.0"]);
    }

    #[test]
    fn test_name_only_specifier() {
        for format in [
            SpecifierFormat::CommaSeparated,
            SpecifierFormat::WhitespaceSeparated,
        ] {
            let req = format.parse("idna").unwrap();
            assert_eq!(req.target, "idna");
            assert!(req.constraints.is_empty());
        }
    }

    #[test]
    fn test_empty_specifier_is_malformed() {
        let result = SpecifierFormat::CommaSeparated.parse("");
        assert!(matches!(
            result.unwrap_err(),
            ManifestError::MalformedSpecifier(_)
        ));

        let result = SpecifierFormat::WhitespaceSeparated.parse("   ");
        assert!(matches!(
            result.unwrap_err(),
            ManifestError::MalformedSpecifier(_)
        ));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(
            "comma".parse::<SpecifierFormat>().unwrap(),
            SpecifierFormat::CommaSeparated
        );
        assert_eq!(
            "SPACE".parse::<SpecifierFormat>().unwrap(),
            SpecifierFormat::WhitespaceSeparated
        );
        assert!("tabs".parse::<SpecifierFormat>().is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format!("{}", SpecifierFormat::CommaSeparated), "comma");
        assert_eq!(format!("{}", SpecifierFormat::WhitespaceSeparated), "space");
    }
}
