use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use deps2neo::cypher::{self, ConstraintEncoding};
use deps2neo::parser::{self, Manifest, SpecifierFormat};
use deps2neo::sink::{self, Neo4jSink};

#[derive(Parser)]
#[command(name = "deps2neo")]
#[command(version)]
#[command(about = "Export installed package dependency graphs to Neo4j as Cypher statements", long_about = None)]
struct Cli {
    /// Bolt URI of the target Neo4j instance
    #[arg(long, required_unless_present = "dry_run")]
    uri: Option<String>,

    /// Database user
    #[arg(long, required_unless_present = "dry_run")]
    user: Option<String>,

    /// Database password
    #[arg(long, required_unless_present = "dry_run")]
    password: Option<String>,

    /// Path to the manifest JSON, or '-' to read standard input
    #[arg(long, default_value = "-")]
    manifest: String,

    /// Specifier format of the manifest: comma or space
    #[arg(long, default_value_t = SpecifierFormat::CommaSeparated)]
    format: SpecifierFormat,

    /// Relationship constraint encoding: list or joined (defaults per format)
    #[arg(long)]
    encoding: Option<ConstraintEncoding>,

    /// Print the statements instead of submitting them
    #[arg(long)]
    dry_run: bool,
}

fn load_manifest(source: &str) -> Result<Manifest> {
    if source == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read manifest from stdin")?;
        parser::parse_str(&content).context("Failed to parse manifest")
    } else {
        parser::parse_file(Path::new(source))
            .with_context(|| format!("Failed to load manifest from '{}'", source))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let manifest = load_manifest(&cli.manifest)?;
    // The core accepts an empty graph; a CLI run with nothing to export
    // is treated as a missing source instead.
    manifest.ensure_non_empty()?;

    let graph = parser::build_graph(&manifest, cli.format)?;
    let roots = graph.roots();
    let encoding = cli
        .encoding
        .unwrap_or_else(|| ConstraintEncoding::default_for(cli.format));
    let statements = cypher::build_statements(&graph, &roots, encoding);

    info!(
        packages = graph.node_count(),
        requirements = graph.requirement_count(),
        roots = roots.len(),
        statements = statements.len(),
        "generated statement sequence"
    );

    if cli.dry_run {
        sink::print_statements(&statements, &mut io::stdout().lock())?;
        return Ok(());
    }

    let uri = cli.uri.context("--uri is required")?;
    let user = cli.user.context("--user is required")?;
    let password = cli.password.context("--password is required")?;

    let neo4j = Neo4jSink::connect(&uri, &user, &password).await?;
    neo4j.submit(&statements).await?;

    Ok(())
}
