//! Execution sinks for the generated statement sequence.
//!
//! A sink consumes statements in the exact order produced by the
//! generator, never reordering or batching them: relationship statements
//! depend on the node statements that precede them.

mod neo4j;

pub use neo4j::{Neo4jSink, SinkError};

use std::io::{self, Write};

use crate::cypher::Statement;

/// Writes each statement on its own line (dry-run output).
pub fn print_statements<W: Write>(statements: &[Statement], writer: &mut W) -> io::Result<()> {
    for statement in statements {
        writeln!(writer, "{}", statement)?;
    }
    Ok(())
}
