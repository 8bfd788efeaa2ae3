use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use order_history::context::{Context, TargetModel};
use order_history::models::{ChartRow, ChartSeries, ExportFormat, OrderType, Period};
use order_history::selection::Selection;
use order_history::{Client, query, series};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "order-history",
    version,
    about = "Fetch order history from a host instance and build chart-ready series"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch history data (and optionally save it, or print an export URL).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PeriodArg {
    Monthly,
    Quarterly,
    Yearly,
}

impl From<PeriodArg> for Period {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Monthly => Period::Monthly,
            PeriodArg::Quarterly => Period::Quarterly,
            PeriodArg::Yearly => Period::Yearly,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderTypeArg {
    Build,
    Purchase,
    Sales,
    Return,
}

impl From<OrderTypeArg> for OrderType {
    fn from(value: OrderTypeArg) -> Self {
        match value {
            OrderTypeArg::Build => OrderType::Build,
            OrderTypeArg::Purchase => OrderType::Purchase,
            OrderTypeArg::Sales => OrderType::Sales,
            OrderTypeArg::Return => OrderType::Return,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportArg {
    Csv,
    Tsv,
    Xls,
    Xlsx,
}

impl From<ExportArg> for ExportFormat {
    fn from(value: ExportArg) -> Self {
        match value {
            ExportArg::Csv => ExportFormat::Csv,
            ExportArg::Tsv => ExportFormat::Tsv,
            ExportArg::Xls => ExportFormat::Xls,
            ExportArg::Xlsx => ExportFormat::Xlsx,
        }
    }
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Host base URL (e.g., https://inventory.example.com)
    #[arg(long)]
    host: String,
    /// API token, sent as "Authorization: Token <value>".
    #[arg(long)]
    token: Option<String>,
    /// Model the query is scoped to (part, company, supplierpart, ...).
    #[arg(long, default_value = "part")]
    model: TargetModel,
    /// Primary key of the record to scope the query to.
    #[arg(long)]
    id: Option<i64>,
    /// Start of the date window (YYYY-MM-DD). Defaults to one year back.
    #[arg(long)]
    start: Option<NaiveDate>,
    /// End of the date window (YYYY-MM-DD). Defaults to one month ahead.
    #[arg(long)]
    end: Option<NaiveDate>,
    /// Grouping period.
    #[arg(long, value_enum, default_value_t = PeriodArg::Monthly)]
    period: PeriodArg,
    /// Order type to filter by.
    #[arg(long, value_enum)]
    order_type: Option<OrderTypeArg>,
    /// Save the chart feed to a JSON file instead of printing it.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Print the export download URL for this format and exit.
    #[arg(long, value_enum)]
    export: Option<ExportArg>,
}

/// What the chart widget consumes: series descriptors plus rows.
#[derive(Serialize)]
struct ChartFeed {
    series: Vec<ChartSeries>,
    rows: Vec<ChartRow>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let defaults = Selection::default();
    let mut selection = Selection::new(
        args.start.unwrap_or_else(|| defaults.start_date()),
        args.end.unwrap_or_else(|| defaults.end_date()),
        args.period.into(),
    )?;
    selection.set_order_type(args.order_type.map(Into::into));

    let context = Context {
        model: args.model,
        instance_id: args.id,
        ..Default::default()
    };

    let params = query::build(&selection, &context);

    let mut client = Client::new(&args.host);
    if let Some(token) = args.token {
        client = client.with_token(token);
    }

    if let Some(format) = args.export {
        println!("{}", client.export_url(format.into(), &params));
        return Ok(());
    }

    let records = client.fetch_history(&params);
    let (chart_series, chart_rows) = series::build(&records);
    let feed = ChartFeed {
        series: chart_series,
        rows: chart_rows,
    };

    let json = serde_json::to_string_pretty(&feed)?;
    if let Some(path) = args.out.as_ref() {
        let mut f = File::create(path)?;
        f.write_all(json.as_bytes())?;
        eprintln!("Saved {} rows to {}", feed.rows.len(), path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}
