use std::process::ExitCode;

use clap::{ArgGroup, Parser, ValueEnum};
use classic_cipher::{Alphabet, ClassicalCipher, Mode, Substitution};
use tracing::{error, info};

/// Command-line arguments for the substitution cipher program.
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("key_source").required(true).args(["key", "random_key"])))]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Substitution key: a permutation of the 26 letters
    #[arg(short, long, help = "Permutation of A-Z used as key")]
    key: Option<String>,

    /// Generate a random key instead of passing one
    #[arg(short, long, help = "Encrypt with a freshly generated random key")]
    random_key: bool,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file (stdout if omitted)")]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt)]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
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
    // Initialize logging
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

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = Alphabet::latin();

    if cli.random_key && cli.mode == OperationMode::Decrypt {
        return Err("a random key can only be used to encrypt".into());
    }

    let key = match &cli.key {
        Some(key) => key.clone(),
        None => {
            let key = alphabet.random_permutation(&mut rand::thread_rng());
            // Printed so the ciphertext can be decrypted later
            println!("Generated key: {}", key);
            key
        }
    };
    let cipher = Substitution::new(&key, &alphabet)?;

    let content: String = std::fs::read_to_string(&cli.file)?;
    let mode = Mode::from(cli.mode);
    info!(key = %cipher.key(), ?mode, "applying substitution");
    let result = cipher.apply(&content, mode);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &result)?;
            info!("Output saved to: {}", path);
        }
        None => println!("{}", result),
    }

    Ok(())
}
