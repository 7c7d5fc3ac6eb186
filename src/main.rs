use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use serde::Serialize;
use tokenscan::{
    apis::{GoPlusClient, HoneypotClient, QuickIntelClient},
    config::{self, CONFIG_FILE_PATH},
    logger::{self, LogTag},
    scan,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Multiscan,
    GoPlus,
    IsHoneypot,
    QuickIntel,
}

impl Mode {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "multiscan" => Some(Mode::Multiscan),
            "goplus" => Some(Mode::GoPlus),
            "ishoneypot" => Some(Mode::IsHoneypot),
            "quickIntel" => Some(Mode::QuickIntel),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Mode::Multiscan => "multiscan",
            Mode::GoPlus => "goplus",
            Mode::IsHoneypot => "ishoneypot",
            Mode::QuickIntel => "quickIntel",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tokenscan")]
#[command(about = "Token security scanner over GoPlus, Honeypot.is and QuickIntel", long_about = None)]
struct Args {
    /// Mode of operation: multiscan, goplus, ishoneypot, or quickIntel
    #[arg(long)]
    mode: Option<String>,

    /// Token address to scan
    #[arg(long)]
    token: Option<String>,

    /// Path to the TOML configuration file
    #[arg(long, default_value = CONFIG_FILE_PATH)]
    config: String,

    /// Log provider requests and response previews
    #[arg(long)]
    debug_api: bool,

    /// Log provider completion timing
    #[arg(long)]
    debug_scanner: bool,

    /// Log the merged report summary
    #[arg(long)]
    debug_merge: bool,

    /// Print the effective configuration
    #[arg(long)]
    debug_config: bool,

    /// Show every log line
    #[arg(long)]
    verbose: bool,

    /// Only show errors
    #[arg(long)]
    quiet: bool,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger::init();

    let Some(mode) = args.mode.as_deref().filter(|m| !m.is_empty()) else {
        exit_with_usage(None);
    };

    let token = match args.token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => exit_with_usage(Some("Error: Token hash is required")),
    };

    let Some(mode) = Mode::parse(mode) else {
        exit_with_usage(Some("Error: Invalid mode specified"));
    };

    if let Err(e) = config::load_config_from_path(&args.config) {
        logger::error(LogTag::Config, &e);
        std::process::exit(1);
    }

    if let Err(e) = run(mode, &token).await {
        eprintln!("Error occurred during {} scan: {}", mode.as_str(), e);
        std::process::exit(1);
    }
}

/// Usage goes to stderr; stdout only ever carries a JSON report
fn exit_with_usage(message: Option<&str>) -> ! {
    if let Some(message) = message {
        eprintln!("{}", message);
    }
    eprintln!("{}", Args::command().render_help());
    std::process::exit(1);
}

async fn run(mode: Mode, token: &str) -> Result<()> {
    let scanners = config::get_config_clone().scanners;
    let timeout = scanners.request_timeout_secs;

    logger::debug(
        LogTag::System,
        &format!("Running {} scan for {}", mode.as_str(), token),
    );

    match mode {
        Mode::Multiscan => print_json(&scan::multiscan(token).await),
        Mode::GoPlus => {
            let client = GoPlusClient::new(scanners.goplus, timeout).map_err(|e| anyhow!(e))?;
            print_json(&client.scan(token).await?)
        }
        Mode::IsHoneypot => {
            let client =
                HoneypotClient::new(scanners.honeypot, timeout).map_err(|e| anyhow!(e))?;
            print_json(&client.scan(token).await?)
        }
        Mode::QuickIntel => {
            let client =
                QuickIntelClient::new(scanners.quickintel, timeout).map_err(|e| anyhow!(e))?;
            print_json(&client.scan(token).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| anyhow!("Error marshalling JSON: {}", e))?;
    println!("{}", rendered);
    Ok(())
}
