use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use classic_cipher::{shift, Alphabet, Mode};
use tracing::{error, info};


// Defining the command-line arguments.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(short,long, help = "Path to the input file")]
    file: String,

    #[arg(short,long, allow_hyphen_values = true, help = "Shift for the cipher (may be negative)")]
    key: i64,

    #[arg(short,long,help = "Path to the output file (stdout if omitted)")]
    output: Option<String>,

    #[arg(short,long,help = "Mode of operation (encrypt/decrypt)")]
    mode: Option<OperationMode>,
}

#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    Encrypt,
    Decrypt,
}

impl From<OperationMode> for Mode {
    fn from(mode: OperationMode) -> Self {
        match mode {
            OperationMode::Encrypt => Mode::Encrypt,
            OperationMode::Decrypt => Mode::Decrypt,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> std::io::Result<()> {
    let content: String = std::fs::read_to_string(&cli.file)?;

    let mode: Mode = cli.mode.clone().map(Mode::from).unwrap_or_default();
    info!(shift = cli.key, ?mode, "applying Caesar cipher");
    let result = shift(&content, cli.key, mode, &Alphabet::latin());

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &result)?;
            info!(output = %path, "result written");
        }
        None => println!("{}", result),
    }

    Ok(())
}
