use anyhow::{Result, bail};
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use schematic_assets::config::{PipelineConfig, StrokeMode};
use schematic_assets::convert::convert_dir;
use schematic_assets::normalize::{Normalizer, normalize_dir};
use schematic_assets::store::{ComponentStore, FsStore};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build schematic editor components from SVG icons", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert every SVG icon into a component JSON file
    Convert {
        #[command(flatten)]
        common: CommonArgs,

        /// Also write the sorted list of converted ids as a JSON array
        #[arg(long, value_name = "FILE")]
        manifest: Option<Utf8PathBuf>,
    },
    /// Rescale components so their strokes render at the same width
    Normalize {
        #[command(flatten)]
        common: CommonArgs,

        /// Where the SVG stroke width comes from
        #[arg(long, value_enum)]
        stroke: Option<StrokeMode>,

        /// Stroke width to assume (or fall back to when none is declared)
        #[arg(long, value_name = "UNITS")]
        stroke_width: Option<f64>,

        /// Target visual stroke width in pixels
        #[arg(long, value_name = "PX")]
        target: Option<f64>,

        /// Report changes without writing files
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Components directory
    #[arg(long, value_name = "DIR", default_value = "components")]
    dir: Utf8PathBuf,

    /// Pipeline config (defaults to <DIR>/pipeline.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<Utf8PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Convert { common, manifest } => {
            let config = PipelineConfig::resolve(common.config.as_deref(), &common.dir)?;
            let summary = convert_dir(&mut FsStore, &common.dir, &config)?;
            if let Some(path) = manifest {
                let json = serde_json::to_string_pretty(&summary.component_index())?;
                FsStore.write_string(&path, &(json + "\n"))?;
                log::info!("Wrote component index to {}", path);
            }
            if summary.is_total_failure() {
                bail!("none of the {} SVG files could be converted", summary.failed.len());
            }
        }
        Command::Normalize {
            common,
            stroke,
            stroke_width,
            target,
            dry_run,
        } => {
            let mut config = PipelineConfig::resolve(common.config.as_deref(), &common.dir)?;
            let n = &mut config.normalize;
            if let Some(stroke) = stroke {
                n.stroke = stroke;
            }
            if let Some(w) = stroke_width {
                n.assumed_stroke_width = w;
            }
            if let Some(t) = target {
                n.target_stroke = t;
            }
            let normalizer = Normalizer::from_config(&config.normalize);
            normalize_dir(&mut FsStore, &common.dir, &normalizer, dry_run)?;
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    // RUST_LOG still overrides the default level.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{} schematic-assets] {}", record.level(), record.args())
        })
        .init();
}
