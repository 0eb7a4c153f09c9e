//! `fiado-pix`: generate, check and decode static Pix codes, and prepare
//! charge reminders from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fiado_charge::{prepare_charge, ChargeRequest, PaymentDisplay};
use fiado_config::FiadoConfig;
use fiado_types::{Decimal, MerchantProfile, TransactionParams};
use pix_codec::{generate_payload, BrCode, PayloadValidator, ValidationLevel};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "fiado-pix", author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Environment overlay (environments/<env>.toml next to the config file)
    #[arg(long, global = true)]
    env: Option<String>,

    /// Log filter when RUST_LOG is unset (overrides the configured level)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a static Pix BR Code
    Generate {
        /// Pix key (CPF, CNPJ, email, phone or random key)
        #[arg(short, long)]
        key: String,

        /// Merchant name
        #[arg(short, long)]
        name: String,

        /// Merchant city
        #[arg(long)]
        city: String,

        /// Amount in reais ("41.00" or "41,00"); omit for an open amount
        #[arg(short, long, value_parser = parse_amount)]
        amount: Option<Decimal>,

        /// Transaction id
        #[arg(short, long)]
        txid: Option<String>,

        /// Additional information shown to the payer
        #[arg(short, long)]
        info: Option<String>,

        /// Also draw the QR code in the terminal
        #[arg(long)]
        qr: bool,
    },

    /// Check a BR Code; exits with status 1 when it is rejected
    Validate {
        payload: String,

        /// shallow, checksum or strict (defaults to the configured level)
        #[arg(short, long, value_parser = parse_level)]
        level: Option<ValidationLevel>,
    },

    /// Decode a BR Code and print its fields as JSON
    Decode { payload: String },

    /// Prepare a charge from a JSON file with store, note and customer
    Charge {
        file: PathBuf,

        /// Draw the QR code in the terminal when a code was generated
        #[arg(long)]
        qr: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn parse_amount(raw: &str) -> std::result::Result<Decimal, String> {
    Decimal::from_str(&raw.trim().replace(',', "."))
        .map_err(|err| format!("invalid amount {raw:?}: {err}"))
}

fn parse_level(raw: &str) -> std::result::Result<ValidationLevel, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "shallow" => Ok(ValidationLevel::Shallow),
        "checksum" => Ok(ValidationLevel::Checksum),
        "strict" => Ok(ValidationLevel::Strict),
        _ => Err(format!(
            "unknown validation level {raw:?} (expected shallow, checksum or strict)"
        )),
    }
}

/// Display a QR code in the terminal
fn print_qr(data: &str) -> Result<()> {
    use qrcode::QrCode;

    let code = QrCode::new(data).context("Failed to encode QR code")?;
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();

    println!("\n{}\n", string);
    Ok(())
}

fn init_tracing(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = FiadoConfig::load(args.config.as_deref(), args.env.as_deref())
        .context("Failed to load configuration")?;

    init_tracing(args.log_level.as_deref().unwrap_or(&config.global.log_level));
    debug!("Configuration loaded: {:?}", config);

    match args.command {
        Command::Generate {
            key,
            name,
            city,
            amount,
            txid,
            info,
            qr,
        } => {
            let merchant = MerchantProfile::new(key, name, city);
            let params = TransactionParams {
                amount,
                reference_label: txid,
                additional_info: info,
            };

            let payload = generate_payload(&merchant, &params)
                .context("Failed to generate Pix code")?;
            println!("{payload}");
            if qr {
                print_qr(&payload)?;
            }
        }

        Command::Validate { payload, level } => {
            let level = level.unwrap_or(config.pix.validation_level);
            let validator = PayloadValidator::new(level);
            match validator.validate(payload.trim()) {
                Ok(()) => println!("valid ({level})"),
                Err(err) => {
                    println!("invalid ({level}): {err}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Command::Decode { payload } => {
            let code = BrCode::decode(payload.trim()).context("Failed to decode Pix code")?;
            println!("{}", serde_json::to_string_pretty(&code)?);
        }

        Command::Charge { file, qr } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let request: ChargeRequest = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse charge request {}", file.display()))?;

            let summary = prepare_charge(&request, &config)?;
            info!(note_id = %request.note.id, code = summary.payment.is_code(), "Charge prepared");
            println!("{}", serde_json::to_string_pretty(&summary)?);

            if let (true, PaymentDisplay::Code { br_code, .. }) = (qr, &summary.payment) {
                print_qr(br_code)?;
            }
        }

        Command::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
