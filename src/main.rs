use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use paypick::CheckoutAdvisor;
use paypick::domain::context::{DeliveryType, OrderContext, order_context_presets};
use paypick::domain::filter::{ConvenienceFilter, FilterState, SpeedFilter};
use paypick::domain::method::{Market, PaymentCategory};
use paypick::domain::ports::CatalogSourceBox;
use paypick::infrastructure::builtin::BuiltinCatalog;
use paypick::infrastructure::json_file::JsonFileCatalog;
use paypick::interfaces::csv::results_writer::ResultsWriter;
use paypick::interfaces::format::format_currency;
use paypick::interfaces::text;
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment catalog JSON file. Uses the built-in catalog when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    /// Log verbosity written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List the methods of a market, marking the ones that do not fit the filters
    Filter {
        #[arg(long, default_value = "PH")]
        market: Market,
        #[arg(long, default_value = "all")]
        speed: SpeedFilter,
        #[arg(long, default_value = "all")]
        convenience: ConvenienceFilter,
        /// Allowed category; repeat for several
        #[arg(long = "category")]
        categories: Vec<PaymentCategory>,
        #[arg(long)]
        search: Option<String>,
        /// Delivery type used to star the recommended methods
        #[arg(long, default_value = "same-day")]
        delivery: DeliveryType,
        #[arg(long, default_value = "500")]
        order_value: Decimal,
    },
    /// Recommend the three best methods for an order
    Recommend {
        /// Use a preset order context (1-based, see `presets`)
        #[arg(long, conflicts_with_all = ["market", "delivery", "order_value"])]
        preset: Option<usize>,
        #[arg(long, default_value = "PH")]
        market: Market,
        #[arg(long, default_value = "same-day")]
        delivery: DeliveryType,
        #[arg(long, default_value = "500")]
        order_value: Decimal,
    },
    /// Compare up to three methods side by side
    Compare {
        #[arg(required = true, num_args = 1..=3)]
        ids: Vec<String>,
    },
    /// List the preset order contexts
    Presets,
}

fn init_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let source: CatalogSourceBox = match cli.catalog {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(BuiltinCatalog),
    };
    let advisor = CheckoutAdvisor::from_source(source).await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Filter {
            market,
            speed,
            convenience,
            categories,
            search,
            delivery,
            order_value,
        } => {
            let state = FilterState {
                speed,
                convenience,
                categories,
                search_query: search.unwrap_or_default(),
            };
            let outcome = advisor.filter(&state, market);
            let recommended =
                advisor.recommend(&OrderContext::new(market, delivery, order_value));

            match cli.format {
                OutputFormat::Table => {
                    text::write_filter_outcome(&mut out, &outcome, Some(&recommended))
                        .into_diagnostic()?
                }
                OutputFormat::Csv => ResultsWriter::new(&mut out)
                    .write_filter_outcome(&outcome)
                    .into_diagnostic()?,
                OutputFormat::Json => write_json(&mut out, &outcome)?,
            }
        }
        Command::Recommend {
            preset,
            market,
            delivery,
            order_value,
        } => {
            let ctx = match preset {
                Some(index) => order_context_presets()
                    .into_iter()
                    .nth(index.wrapping_sub(1))
                    .ok_or_else(|| miette!("No preset #{index}; run `presets` to list them"))?,
                None => OrderContext::new(market, delivery, order_value),
            };
            let result = advisor.recommend(&ctx);

            match cli.format {
                OutputFormat::Table => {
                    text::write_recommendations(&mut out, &ctx, &result).into_diagnostic()?
                }
                OutputFormat::Csv => ResultsWriter::new(&mut out)
                    .write_recommendations(&result)
                    .into_diagnostic()?,
                OutputFormat::Json => write_json(&mut out, &result)?,
            }
        }
        Command::Compare { ids } => {
            let rows = advisor.compare(&ids).into_diagnostic()?;
            let names: Vec<&str> = ids
                .iter()
                .filter_map(|id| advisor.find(id))
                .map(|m| m.name.as_str())
                .collect();
            if names.is_empty() {
                return Err(miette!("None of the requested payment methods exist"));
            }

            match cli.format {
                OutputFormat::Table => {
                    text::write_comparison(&mut out, &names, &rows).into_diagnostic()?
                }
                OutputFormat::Csv => ResultsWriter::new(&mut out)
                    .write_comparison(&names, &rows)
                    .into_diagnostic()?,
                OutputFormat::Json => write_json(&mut out, &rows)?,
            }
        }
        Command::Presets => {
            let presets = order_context_presets();
            if cli.format == OutputFormat::Json {
                write_json(&mut out, &presets)?;
            } else {
                for (i, preset) in presets.iter().enumerate() {
                    writeln!(
                        out,
                        "{}. {} ({}, {}, {})",
                        i + 1,
                        preset.label.as_deref().unwrap_or("Custom"),
                        preset.market,
                        preset.delivery_type,
                        format_currency(preset.order_value, preset.market)
                    )
                    .into_diagnostic()?;
                }
            }
        }
    }

    Ok(())
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;
    Ok(())
}
