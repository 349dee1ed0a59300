//! Command-line lookups against the country subunit bounding boxes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use country_bounding_boxes::config::Config;
use country_bounding_boxes::dataset::{BundledDataset, CsvFile, SubunitSource};
use country_bounding_boxes::export::write_feature_collection;
use country_bounding_boxes::iso::{best_guess_iso3, IntegrityPolicy, Iso3166};
use country_bounding_boxes::{CountryBoxes, CountrySubunit};

#[derive(Parser, Debug)]
#[command(name = "cbb")]
#[command(about = "Country subunit lookups by point or ISO code")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Subunit CSV to use instead of the bundled dataset
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Fail on inconsistent ISO codes in the dataset
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Log inconsistent ISO codes and keep going
    #[arg(long)]
    lenient: bool,

    /// Print records as JSON
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Subunits whose bounding box contains a point
    Point {
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
    },
    /// Subunits for an ISO 3166 alpha-2 or alpha-3 code
    Code { code: String },
    /// Every subunit in dataset order
    List,
    /// Subunit names grouped by alpha-3 code
    Groups,
    /// Bounding boxes as a GeoJSON FeatureCollection
    Geojson {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the dataset's ISO codes for consistency
    Verify,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    // RUST_LOG wins over --log-level and the config file
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
            EnvFilter::try_new(level).context("Invalid log level")?
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let policy = if args.strict {
        IntegrityPolicy::Strict
    } else if args.lenient {
        IntegrityPolicy::Lenient
    } else {
        config.index.policy
    };

    let dataset_path = args.dataset.as_ref().or(config.dataset.path.as_ref());
    let source: Box<dyn SubunitSource> = match dataset_path {
        Some(path) => Box::new(CsvFile::new(path)),
        None => Box::new(BundledDataset),
    };

    let boxes = CountryBoxes::from_source(source.as_ref(), Box::new(Iso3166), policy)
        .context("Failed to load subunit dataset")?;
    info!("Loaded {} subunits", boxes.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Command::Point { lon, lat } => {
            print_subunits(&mut out, &boxes.subunits_containing(lon, lat), args.json)?;
        }
        Command::Code { code } => {
            let found = boxes
                .subunits_by_code(&code)
                .context("ISO index could not be built")?;
            print_subunits(&mut out, &found, args.json)?;
        }
        Command::List => {
            let all: Vec<&CountrySubunit> = boxes.all_subunits().collect();
            print_subunits(&mut out, &all, args.json)?;
        }
        Command::Groups => {
            for (code, subunits) in boxes
                .all_subunits_grouped_by_iso3()
                .context("ISO index could not be built")?
            {
                let names: Vec<&str> = subunits.iter().map(|s| s.name.as_str()).collect();
                writeln!(out, "{}\t{}", code.unwrap_or("-"), names.join(", "))?;
            }
        }
        Command::Geojson { output } => match output {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                write_feature_collection(boxes.all_subunits(), BufWriter::new(file))?;
                info!("Wrote {} features to {}", boxes.len(), path.display());
            }
            None => write_feature_collection(boxes.all_subunits(), &mut out)?,
        },
        Command::Verify => {
            boxes.verify().context("Dataset failed its ISO consistency check")?;
            let report = boxes.adjustment_report();
            writeln!(
                out,
                "ok: {} subunits ({} replaced, {} appended, {} split)",
                boxes.len(),
                report.replaced,
                report.appended,
                report.split
            )?;
        }
    }

    out.flush()?;
    Ok(())
}

fn print_subunits<W: Write>(out: &mut W, subunits: &[&CountrySubunit], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, subunits)?;
        writeln!(out)?;
        return Ok(());
    }

    for subunit in subunits {
        writeln!(
            out,
            "{}\t{}\t{}",
            subunit.name,
            best_guess_iso3(subunit, &Iso3166).unwrap_or("-"),
            subunit.bbox
        )?;
    }
    Ok(())
}
