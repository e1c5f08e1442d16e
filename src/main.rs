//! # Recibo CLI
//!
//! Command-line interface for ESC/POS receipt printing.
//!
//! ## Usage
//!
//! ```bash
//! # Print a demo receipt to a USB printer
//! recibo --device /dev/usb/lp0 demo
//!
//! # Print a demo receipt over the network (port 9100 by default)
//! recibo --host 192.168.1.50 demo
//!
//! # Show the bytes instead of printing
//! recibo --dump demo
//!
//! # Print an image on a 58mm printer with ordered dithering
//! recibo --model 58mm --host 192.168.1.50 image logo.png --bayer
//! ```
//!
//! Set `RUST_LOG=debug` to see transport activity.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use recibo::{
    ReciboError,
    printer::{BeepOptions, Printer, PrinterConfig},
    protocol::barcode::{
        Barcode, BarcodeOptions, Pdf417Options, Position, QrErrorLevel, QrModel, QrOptions,
    },
    protocol::graphics::RasterMode,
    protocol::text::{Justification, TextMode, Underline},
    raster::{Dither, Raster, RasterImage},
    transport::{DeviceTransport, MemoryTransport, NetworkTransport, Transport},
};

/// Device used when no output is given
const DEFAULT_DEVICE: &str = "/dev/usb/lp0";

/// Log filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG: &str = "info";

/// Recibo - ESC/POS receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer device path
    #[arg(long, value_name = "PATH", conflicts_with_all = ["host", "dump"])]
    device: Option<PathBuf>,

    /// Network printer, HOST or HOST:PORT
    #[arg(long, conflicts_with = "dump")]
    host: Option<String>,

    /// Network connect timeout in seconds
    #[arg(long, default_value = "5", requires = "host")]
    timeout: u64,

    /// Hex dump the command bytes instead of printing
    #[arg(long)]
    dump: bool,

    /// Printer profile (80mm, 58mm)
    #[arg(long, default_value = "80mm", value_parser = parse_model)]
    model: PrinterConfig,

    /// Text encoding (defaults to the profile's)
    #[arg(long)]
    encoding: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a sample receipt using styles, barcodes and a cut
    Demo,

    /// Print an image file, scaled to the paper width
    Image {
        /// Image to print (PNG, JPEG, GIF, ...)
        file: PathBuf,

        /// Use Bayer ordered dithering instead of a threshold
        #[arg(long)]
        bayer: bool,

        /// Luma below this prints black (threshold mode)
        #[arg(long, default_value = "128")]
        threshold: u8,
    },
}

/// Work to send once the transport is open
enum Job {
    Demo,
    Image(RasterImage),
}

fn parse_model(name: &str) -> Result<PrinterConfig, String> {
    PrinterConfig::by_name(name).ok_or_else(|| {
        let known: Vec<&str> = PrinterConfig::ALL.iter().map(|c| c.name).collect();
        format!("unknown printer model '{}' (known: {})", name, known.join(", "))
    })
}

/// `RUST_LOG` directives if they parse, otherwise [`DEFAULT_LOG`].
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

#[tokio::main]
async fn main() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ReciboError> {
    let config = cli.model;
    let encoding = cli
        .encoding
        .unwrap_or_else(|| config.default_encoding.to_string());

    let job = match cli.command {
        Commands::Demo => Job::Demo,
        Commands::Image {
            file,
            bayer,
            threshold,
        } => {
            let decoded = image::open(&file).map_err(|e| {
                ReciboError::Image(format!("Failed to load {}: {}", file.display(), e))
            })?;
            let dither = if bayer {
                Dither::Bayer
            } else {
                Dither::Threshold(threshold)
            };
            let raster = RasterImage::from_image(&decoded, config.width_dots, dither)?;
            info!(
                "Rasterized {} to {}x{} dots",
                file.display(),
                raster.width(),
                raster.height()
            );
            Job::Image(raster)
        }
    };

    if cli.dump {
        let mut transport = MemoryTransport::new();
        print_job(&mut transport, &config, &encoding, &job).await?;
        print!("{}", hex_dump(&transport.bytes()));
    } else if let Some(host) = cli.host {
        let mut transport = NetworkTransport::new(host);
        transport.set_connect_timeout(Duration::from_secs(cli.timeout));
        info!("Printing to {}", transport.addr());
        print_job(&mut transport, &config, &encoding, &job).await?;
        println!("Printed successfully!");
    } else {
        let path = cli.device.unwrap_or_else(|| PathBuf::from(DEFAULT_DEVICE));
        let mut transport = DeviceTransport::new(&path);
        info!("Printing to {}", path.display());
        print_job(&mut transport, &config, &encoding, &job).await?;
        println!("Printed successfully!");
    }

    Ok(())
}

/// Open the transport, encode the job and close (which flushes).
async fn print_job<T: Transport + ?Sized>(
    transport: &mut T,
    config: &PrinterConfig,
    encoding: &str,
    job: &Job,
) -> Result<(), ReciboError> {
    let mut printer = Printer::with_encoding(transport, encoding);
    printer.open().await?;
    printer.init().set_code_table(config.code_table);

    match job {
        Job::Demo => demo_receipt(&mut printer)?,
        Job::Image(raster) => {
            printer
                .set_justification(Justification::Center)
                .raster(raster, RasterMode::Normal)
                .feed(3)
                .cut(false);
        }
    }

    printer.close().await
}

fn demo_receipt<T: Transport + ?Sized>(printer: &mut Printer<'_, T>) -> Result<(), ReciboError> {
    printer
        .set_justification(Justification::Center)
        .set_text_mode(TextMode::DualWidthAndHeight)
        .write_line("CAFÉ DEL SOL", None)?
        .set_text_mode(TextMode::Normal)
        .write_line("Calle Mayor 12, Madrid", None)?
        .feed(1)
        .set_justification(Justification::Left)
        .set_underline(Underline::Single)
        .write_line("Item                       Price", None)?
        .set_underline(Underline::NoUnderline)
        .write_list(
            [
                "Café con leche              2.40",
                "Tostada con tomate          3.10",
                "Zumo de naranja             3.50",
            ],
            None,
        )?
        .set_line_spacing(Some(40))
        .set_bold(true)
        .set_double_strike(true)
        .write_line("TOTAL                       9.00", None)?
        .set_line_spacing(None)
        .set_double_strike(false)
        .reset_styles()
        .feed(1);

    printer
        .set_justification(Justification::Center)
        .barcode(
            "4006381333931",
            Barcode::Ean13,
            BarcodeOptions {
                height: 80,
                width: 2,
                position: Position::Below,
                ..Default::default()
            },
        )
        .feed(1)
        .qr(
            "https://example.com/r/1042",
            QrOptions::new()
                .model(QrModel::Model2)
                .error_level(QrErrorLevel::M)
                .size(6),
        )
        .feed(1)
        .pdf417(
            "ORDER 1042 TOTAL 9.00",
            Pdf417Options {
                width: 2,
                height: 3,
                ..Default::default()
            },
        )
        .feed(1)
        .set_inverse(true)
        .write_line(" ¡Gracias! ", None)?
        .set_inverse(false)
        .feed(3)
        .beep(BeepOptions::new(1, 2))
        .cut(true);

    Ok(())
}

/// Format bytes as `offset  hex  |ascii|` lines, 16 bytes per line.
fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in data.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        out.push_str(&format!("{:08x}  {:<47}  |{}|\n", i * 16, hex.join(" "), ascii));
    }
    out
}
