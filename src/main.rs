use clap::Parser;
use color_eyre::Result;
use std::io::Write;
use std::path::PathBuf;

use facet_stats::config::{self, OutputFormat};
use facet_stats::{FacetValueStats, Report, input};

/// Facet value statistics report
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Print a report of the statistics computed for each facet value"
)]
struct Args {
    /// Facets document as JSON (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Statistic to include as a column (repeatable)
    #[arg(short, long = "stat", value_name = "NAME")]
    stats: Vec<String>,

    /// Text printed for a statistic that was not returned
    #[arg(long, value_name = "TEXT")]
    absent: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.verbose);

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }
    let report_config = config_result.config.report;

    let names = if args.stats.is_empty() {
        report_config.stats
    } else {
        args.stats
    };
    let absent = args.absent.unwrap_or(report_config.absent);
    let format = args.format.unwrap_or(report_config.format);

    let report = Report::from_names(&names, absent)?;
    let facets = input::load_facets(args.input.as_deref())?;

    print_report(&report, &facets, format)?;

    log::debug!("Rendered {} facet values", facets.len());
    Ok(())
}

/// Logs to stderr, level from RUST_LOG unless --verbose is given
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder
        .format(|buf, record| {
            let datetime = chrono::Local::now();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn print_report(report: &Report, facets: &[FacetValueStats], format: OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Text => write!(stdout, "{}", report.render_text(facets))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &report.render_json(facets))?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
