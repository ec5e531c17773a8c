use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rilstar::{
    ContextId, DataCallListDecoder, DataCallSnapshots, DecodeError, DecoderConfig, ErrorClass,
};

/// Decode RIL data call list messages and report changed contexts.
#[derive(Debug, Parser)]
#[command(name = "rilstar", version, about)]
struct Cli {
    /// Raw parcel of the message to decode.
    message: PathBuf,

    /// Raw parcel of the previous message; changed contexts are reported against it.
    #[arg(long)]
    previous: Option<PathBuf>,

    /// Interface name assumed for legacy calls.
    #[arg(long, default_value = rilstar::constants::DEFAULT_CALL_INTERFACE)]
    interface: String,

    /// Do not build per-message traces.
    #[arg(long)]
    no_trace: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let decoder = DataCallListDecoder::with_config(DecoderConfig {
        default_interface: cli.interface.clone(),
        trace: !cli.no_trace,
    });
    tracing::debug!(
        interface = %decoder.config().default_interface,
        trace = decoder.config().trace,
        "decoder configured"
    );

    match run(&cli, &decoder) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Read(path, err)) => {
            eprintln!("failed to read {}: {}", path.display(), err);
            ExitCode::from(2)
        }
        Err(CliError::Decode(path, err)) => {
            eprintln!("failed to decode {}: {}", path.display(), err);
            match err.class() {
                ErrorClass::InvalidArgument => ExitCode::from(3),
                ErrorClass::Failure => ExitCode::from(4),
            }
        }
    }
}

enum CliError {
    Read(PathBuf, std::io::Error),
    Decode(PathBuf, DecodeError),
}

fn run(cli: &Cli, decoder: &DataCallListDecoder) -> Result<(), CliError> {
    let mut snapshots = DataCallSnapshots::new();

    if let Some(previous) = &cli.previous {
        feed(&mut snapshots, decoder, previous)?;
    }
    let changed = feed(&mut snapshots, decoder, &cli.message)?;

    if let Some(list) = snapshots.current() {
        println!("version={} num={}", list.version().value(), list.num());
        for call in list {
            println!("  {}", call);
        }
    }

    if cli.previous.is_some() {
        if changed.is_empty() {
            println!("no contexts changed");
        } else {
            let cids: Vec<String> = changed.iter().map(|cid| cid.value().to_string()).collect();
            println!("changed contexts: {}", cids.join(", "));
        }
    }
    Ok(())
}

fn feed(
    snapshots: &mut DataCallSnapshots,
    decoder: &DataCallListDecoder,
    path: &Path,
) -> Result<Vec<ContextId>, CliError> {
    let buffer = std::fs::read(path).map_err(|err| CliError::Read(path.to_path_buf(), err))?;
    snapshots
        .handle_unsolicited(decoder, &buffer)
        .map_err(|err| CliError::Decode(path.to_path_buf(), err))
}
