mod config;
mod interactive;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gst_invoice::core::{
    Assets, InvoiceInputBuilder, Session, calculate_amounts, format_decimal_2, parse_amount,
};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::output::Format;

#[derive(Parser)]
#[command(name = "gst-invoice", version, about = "Tax-inclusive GST invoice generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the GST breakdown of a tax-inclusive price
    Calculate {
        #[arg(long, allow_hyphen_values = true)]
        mrp: String,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        discount: String,
        /// Print the amounts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate an invoice document without prompting
    Generate(GenerateArgs),
    /// Fill in and preview an invoice step by step (default)
    Interactive,
    /// Show settings, or update them with the given flags
    Config {
        #[arg(long)]
        logo: Option<PathBuf>,
        #[arg(long)]
        signature: Option<PathBuf>,
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct GenerateArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long)]
    gstin: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    mrp: String,
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    discount: String,
    /// Invoice date, today if omitted
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    invoice_no: Option<String>,
    #[arg(long)]
    order_no: Option<String>,
    #[arg(long, value_enum, default_value = "html")]
    format: Format,
    /// Output file; text goes to stdout and other formats to the output dir
    #[arg(long)]
    out: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = config::load_settings()?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Calculate { mrp, discount, json } => {
            let amounts = calculate_amounts(parse_amount(&mrp), parse_amount(&discount));
            if json {
                println!("{}", serde_json::to_string_pretty(&amounts)?);
            } else {
                println!("{}", output::summary_table(&amounts));
            }
        }
        Commands::Generate(args) => generate(args, &settings)?,
        Commands::Interactive => interactive::run(&settings)?,
        Commands::Config {
            logo,
            signature,
            output_dir,
        } => {
            if logo.is_none() && signature.is_none() && output_dir.is_none() {
                println!("# {}", config::config_path().display());
                print!("{}", toml::to_string_pretty(&settings)?);
                return Ok(());
            }
            let mut updated = settings;
            if let Some(path) = logo {
                updated.logo_path = path;
            }
            if let Some(path) = signature {
                updated.signature_path = path;
            }
            if let Some(dir) = output_dir {
                updated.output_dir = dir;
            }
            let path = config::save_settings(&updated)?;
            println!("Settings saved to {}", path.display());
        }
    }
    Ok(())
}

fn generate(args: GenerateArgs, settings: &Settings) -> Result<()> {
    let mut builder = InvoiceInputBuilder::new(args.name, args.email)
        .description(args.description)
        .mrp(parse_amount(&args.mrp))
        .discount(parse_amount(&args.discount));
    if let Some(gstin) = args.gstin {
        builder = builder.gstin(gstin);
    }
    if let Some(address) = args.address {
        builder = builder.address(address);
    }
    if let Some(date) = args.date {
        builder = builder.date(date);
    }
    if let Some(number) = args.invoice_no {
        builder = builder.invoice_no(number);
    }
    if let Some(number) = args.order_no {
        builder = builder.order_no(number);
    }

    let assets = Assets::load(&settings.logo_path, &settings.signature_path);
    let mut session = Session::with_draft(builder.build(), assets);
    let amounts = session.generate()?;
    let doc = session
        .document()
        .context("no document after generating the invoice")?;
    tracing::info!(total = %format_decimal_2(amounts.total_amount), "invoice generated");

    if args.format == Format::Text && args.out.is_none() {
        print!("{}", doc.to_text());
        return Ok(());
    }
    let path = output::write_document(&doc, args.format, args.out.as_deref(), &settings.output_dir)?;
    println!("{}", path.display());
    Ok(())
}
