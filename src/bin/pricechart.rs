use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pricechart_rs::{chart, stats, storage};
use pricechart_rs::{AlignedSeries, Client, FilterState, MonthKey, PriceSource, RegionInfo};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pricechart",
    version,
    about = "Fetch project & reference price series and build render-ready chart specs"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch data for a filter and emit the chart spec (optionally save data and print stats).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Region fields separated by comma or semicolon (e.g., dongcheng,xicheng)
    #[arg(short, long)]
    regions: String,
    /// First month of the range (YYYY-MM). Defaults to three months back.
    #[arg(long)]
    start: Option<String>,
    /// Last month of the range (YYYY-MM). Defaults to the current month.
    #[arg(long)]
    end: Option<String>,
    /// Base URL of the price-data service.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    base_url: String,
    /// Save the fetched series to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Write the chart spec JSON to this path instead of stdout.
    #[arg(long)]
    spec: Option<PathBuf>,
    /// Print grouped statistics to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 2 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.2}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let fields = parse_list(&args.regions);
    if fields.is_empty() {
        anyhow::bail!("at least one region required");
    }

    // The CLI has no region catalog service; the field doubles as the name.
    let catalog: Vec<RegionInfo> = fields.iter().map(|f| RegionInfo::new(f, f)).collect();
    let mut filters = FilterState::with_current_date(catalog);
    if args.start.is_some() || args.end.is_some() {
        let (default_start, default_end) = filters.date_range();
        let start = match &args.start {
            Some(s) => s.parse::<MonthKey>()?,
            None => default_start,
        };
        let end = match &args.end {
            Some(s) => s.parse::<MonthKey>()?,
            None => default_end,
        };
        filters.set_date_range(start, end)?;
    }
    let filter = filters.filter();

    let client = Client::new(args.base_url);
    let bundle = client.fetch(&filter)?;
    eprintln!(
        "Fetched {} project rows and {} reference rows for {}",
        bundle.project_data.len(),
        bundle.reference_price_data.len(),
        filters.summary()
    );

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&bundle, path)?,
            "json" => storage::save_json(&bundle, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved fetched series to {}", path.display());
    }

    let aligned = AlignedSeries::build(&bundle.project_data, &bundle.reference_price_data);
    match chart::build_spec(&aligned) {
        None => eprintln!("{}", pricechart_rs::pipeline::NO_DATA_TEXT),
        Some((mode, spec)) => {
            eprintln!(
                "{} ({} datasets over {} labels)",
                mode.title(),
                spec.data.datasets.len(),
                spec.data.labels.len()
            );
            let json = serde_json::to_string_pretty(&spec)?;
            match args.spec.as_ref() {
                Some(path) => {
                    std::fs::write(path, json)?;
                    eprintln!("Wrote chart spec to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    if args.stats {
        let summaries = stats::grouped_summary(&bundle);
        for s in summaries {
            println!(
                "{} • {}  count={} missing={}  min={} max={} mean={} median={}",
                s.key.name,
                s.key.region,
                s.count,
                s.missing,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median)
            );
        }
    }

    Ok(())
}
