use clap::Parser;
use component_resolver::application::dto::OutputFormat;

/// Resolve electronic component codes and scanned QR payloads
#[derive(Parser, Debug)]
#[command(name = "component-resolver")]
#[command(version)]
#[command(
    about = "Resolve marketplace part codes and scanned QR payloads into component records",
    long_about = None
)]
pub struct Args {
    /// Platform code to resolve (e.g. C2040)
    #[arg(required_unless_present_any = ["qr", "list_platforms"], conflicts_with = "qr")]
    pub code: Option<String>,

    /// Raw QR payload to interpret and resolve (e.g. "{pc:C2040,qty:10}")
    #[arg(long, value_name = "PAYLOAD")]
    pub qr: Option<String>,

    /// List supported platforms in dispatch order and exit
    #[arg(long, conflicts_with_all = ["code", "qr"])]
    pub list_platforms: bool,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a config file (defaults to ./component-resolver.config.yml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Request timeout in seconds for marketplace lookups
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
