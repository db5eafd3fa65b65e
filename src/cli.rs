// command line interface

use crate::tui::ThemeKind;
use crate::{DEFAULT_BOT_NAME, Error, ExportFormat, Session};
use clap::Parser;
use miette::Result;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "supportbot",
    version,
    about = "A gentle, keyword driven support chat for the terminal"
)]
struct Cli {
    /// name the bot introduces itself with
    #[arg(long, short, env = "SUPPORTBOT_NAME", default_value = DEFAULT_BOT_NAME)]
    name: String,

    /// fixed seed for reproducible replies
    #[arg(long, short, env = "SUPPORTBOT_SEED")]
    seed: Option<u64>,

    /// line based console instead of the full screen ui
    #[arg(long)]
    plain: bool,

    /// typing delay in plain mode, milliseconds
    #[arg(long, default_value = "1000")]
    delay_ms: u64,

    /// save the conversation when it ends
    #[arg(long, short)]
    export: bool,

    /// where to save the conversation (implies --export)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// transcript file format
    #[arg(long, value_enum, default_value = "text")]
    format: ExportFormat,

    /// ui theme, detected from the terminal when omitted
    #[arg(long, short, value_enum)]
    theme: Option<ThemeKind>,

    /// write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// What to do with the transcript once the conversation is over.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub enabled: bool,
    pub path: Option<PathBuf>,
    pub format: ExportFormat,
}

impl ExportOptions {
    /// `--out` on its own is enough to turn export on.
    pub fn from_flags(export: bool, out: Option<PathBuf>, format: ExportFormat) -> Self {
        Self {
            enabled: export || out.is_some(),
            path: out,
            format,
        }
    }
}

/// Where tracing output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Off,
}

impl LogTarget {
    /// The full screen ui owns the terminal, so without `--log-file` it gets
    /// no subscriber at all.
    pub fn select(log_file: Option<&Path>, plain: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path.to_path_buf()),
            None if plain => LogTarget::Stderr,
            None => LogTarget::Off,
        }
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LogTarget::select(cli.log_file.as_deref(), cli.plain))?;

    let session = match cli.seed {
        Some(seed) => Session::seeded(&cli.name, seed),
        None => Session::new(&cli.name),
    };

    let export = ExportOptions::from_flags(cli.export, cli.out, cli.format);

    tracing::info!(bot = %cli.name, plain = cli.plain, seeded = cli.seed.is_some(), "starting session");

    if cli.plain {
        let delay = Duration::from_millis(cli.delay_ms);
        Ok(crate::console::run(session, delay, &export).await?)
    } else {
        Ok(crate::tui::run(session, cli.theme, export).await?)
    }
}

fn init_logging(target: LogTarget) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::File(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::Off => {}
    }

    Ok(())
}
