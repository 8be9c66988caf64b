use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fivenum_rs::viz::util::format_value;
use fivenum_rs::{ChartConfig, ParseMode, Theme, TickSet};
use fivenum_rs::{app, ingest, summary, viz};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "fivenum",
    version,
    about = "Five-number summary & box plot for the numbers in a CSV file"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a file (and optionally draw its box plot).
    Summarize(SummarizeArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TicksArg {
    Three,
    Five,
}

#[derive(Args, Debug)]
struct SummarizeArgs {
    /// CSV file; every numeric field in every row is used.
    file: PathBuf,
    /// Fail on non-numeric tokens instead of skipping them.
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// How to print the summary.
    #[arg(long, value_enum, default_value = "text")]
    format: OutFormat,
    /// Draw the box plot to the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Chart settings as JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Width of the plot (default 600).
    #[arg(long)]
    width: Option<u32>,
    /// Height of the plot (default 220).
    #[arg(long)]
    height: Option<u32>,
    /// Marker ticks to draw.
    #[arg(long, value_enum)]
    ticks: Option<TicksArg>,
    /// Draw a numeric axis under the plot.
    #[arg(long, default_value_t = false)]
    axis: bool,
    /// Use the dark theme for the plot.
    #[arg(long, default_value_t = false)]
    dark: bool,
    /// Locale for number formatting (en, de, fr, es, it, pt, nl).
    #[arg(long)]
    locale: Option<String>,
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn chart_config(args: &SummarizeArgs) -> Result<ChartConfig> {
    let mut config = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => ChartConfig::default(),
    };
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if let Some(t) = args.ticks {
        config.tick_set = match t {
            TicksArg::Three => TickSet::Three,
            TicksArg::Five => TickSet::Five,
        };
    }
    if args.axis {
        config.show_axis = true;
    }
    if let Some(l) = &args.locale {
        config.locale = l.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Summarize(args) => cmd_summarize(args),
    }
}

fn cmd_summarize(args: SummarizeArgs) -> Result<()> {
    let config = chart_config(&args)?;
    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };

    let sample = ingest::read_numbers(&args.file, mode)?;
    let count = sample.len();
    let s = summary::five_number_summary(sample)
        .with_context(|| format!("cannot summarize {}", args.file.display()))?;

    match args.format {
        OutFormat::Text => {
            println!("Five Number Summary ({count} values)");
            for line in app::results_lines(&s, &config.locale) {
                println!("{line}");
            }
            println!("IQR: {}", format_value(s.iqr(), &config.locale));
        }
        OutFormat::Json => println!("{}", serde_json::to_string_pretty(&s)?),
    }

    if let Some(plot_path) = args.plot.as_ref() {
        let theme = if args.dark { Theme::Dark } else { Theme::Light };
        viz::render_to_file(&s, plot_path, theme, &config)?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    Ok(())
}
