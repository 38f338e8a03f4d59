//! Command-line driver for the resource embedding engine
//!
//! Each invocation wires a fresh engine from configuration, loads the
//! requested feed (a JSON file or the built-in samples), and runs one
//! query against it.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use resem_application::{
    AnalysisService, AnalysisSettings, IngestionService, SimilarityService, sample_records,
};
use resem_domain::ports::VectorStore;
use resem_domain::{ResourceRecord, TierThresholds};
use resem_infrastructure::config::ConfigLoader;
use resem_infrastructure::{build_generator, build_store, logging};

#[derive(Parser)]
#[command(
    name = "resem",
    version,
    about = "Resource embedding and similarity analysis engine"
)]
struct Cli {
    /// Path to a TOML configuration file (default: ./resem.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON file holding an array of resource records to load
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Embed and store the feed, then print the ingest report
    Ingest,
    /// Nearest neighbors of a stored resource (the resource itself excluded)
    Similar {
        /// Resource type to search within
        resource_type: String,
        /// Reference resource id
        resource_id: String,
        /// Number of neighbors to return
        #[arg(short, long, default_value_t = 5)]
        k: usize,
    },
    /// Average distance per attribute group against a stored resource
    Groups {
        /// Resource type to analyze
        resource_type: String,
        /// Reference resource id
        resource_id: String,
        /// Attribute(s) to group by; repeat for composite groups
        #[arg(long = "by", required = true)]
        by: Vec<String>,
    },
    /// Pairwise standardization recommendations for a resource type
    Recommend {
        /// Resource type to analyze
        resource_type: String,
        /// Bound the number of returned pairs
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Rebuild the ANN index over the loaded feed
    Reindex {
        /// Partition count ("lists"); defaults to the configured value
        #[arg(long)]
        partitions: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("loading configuration")?;
    logging::init(&config.logging);

    let generator = build_generator(&config).context("building embedding generator")?;
    let store = build_store(&config);
    let ingestion = IngestionService::new(generator, Arc::clone(&store));
    let similarity = SimilarityService::new(Arc::clone(&store));
    let analysis = AnalysisService::new(
        Arc::clone(&store),
        AnalysisSettings {
            thresholds: TierThresholds {
                high: config.analysis.high_similarity_threshold,
                moderate: config.analysis.moderate_similarity_threshold,
            },
            max_unbounded_pairs: config.analysis.max_unbounded_pairs,
        },
    );

    let records = load_records(cli.file.as_deref())?;
    let report = ingestion.ingest_batch(records).await;
    if !report.failed.is_empty() {
        for failure in &report.failed {
            tracing::error!(
                resource_type = %failure.resource_type,
                resource_id = %failure.resource_id,
                error = %failure.error,
                "ingest failure"
            );
        }
    }

    match cli.command {
        Command::Ingest => {
            println!(
                "ingested {} record(s), {} already present, {} failed",
                report.inserted,
                report.skipped_existing,
                report.failed.len()
            );
            if !report.failed.is_empty() {
                anyhow::bail!("{} record(s) failed to ingest", report.failed.len());
            }
        }
        Command::Similar {
            resource_type,
            resource_id,
            k,
        } => {
            let results = similarity
                .nearest_to_resource(&resource_type, &resource_id, k)
                .await?;
            println!("nearest to {resource_type}/{resource_id}:");
            for result in results {
                println!(
                    "  {:>10.4}  {}",
                    result.distance, result.embedding.resource_id
                );
            }
        }
        Command::Groups {
            resource_type,
            resource_id,
            by,
        } => {
            let reference = store
                .get(&resource_type, &resource_id)
                .await?
                .ok_or_else(|| {
                    anyhow::anyhow!("no embedding for {resource_type}/{resource_id}")
                })?;
            let groups = analysis
                .group_average(&resource_type, &reference.vector, &by)
                .await?;
            println!("group averages for {resource_type} (by {}):", by.join(", "));
            for group in groups {
                println!(
                    "  {:>10.4}  {:>4}  {}",
                    group.avg_distance, group.size, group.group
                );
            }
        }
        Command::Recommend {
            resource_type,
            limit,
        } => {
            let pairs = analysis
                .pairwise_recommendations(&resource_type, limit)
                .await?;
            println!("pairwise recommendations for {resource_type}:");
            for pair in pairs {
                println!(
                    "  {:>10.4}  {:<20} {} <-> {}",
                    pair.distance,
                    pair.tier.action(),
                    pair.a.resource_id,
                    pair.b.resource_id
                );
            }
        }
        Command::Reindex { partitions } => {
            let partitions = partitions.unwrap_or(config.store.ann_partitions);
            store.rebuild_index(partitions).await?;
            println!("index rebuilt with {partitions} partition(s)");
        }
    }

    Ok(())
}

/// Load the feed: a JSON array of records, or the built-in samples
fn load_records(file: Option<&std::path::Path>) -> anyhow::Result<Vec<ResourceRecord>> {
    match file {
        Some(path) => {
            let reader = BufReader::new(
                File::open(path).with_context(|| format!("opening {}", path.display()))?,
            );
            serde_json::from_reader(reader)
                .with_context(|| format!("parsing records from {}", path.display()))
        }
        None => Ok(sample_records()),
    }
}
