use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use classic_cipher::{Alphabet, ClassicalCipher, Mode, RunningKey};
use tracing::{error, info};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher (letters only)")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file (stdout if omitted)")]
    output: Option<String>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
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

/// Main entry point for the Vigenère cipher program.
fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Reads the input, applies the cipher and writes the result.
///
/// The input is normalized first: accents are folded, and spaces,
/// punctuation and digits are dropped without advancing the key.
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Validate the key before touching any file
    let cipher = RunningKey::new(&cli.key, &Alphabet::latin())?;

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)?;

    // Process based on selected mode
    let mode = Mode::from(cli.mode);
    match mode {
        Mode::Encrypt => info!(key = %cipher.key(), "Encrypting"),
        Mode::Decrypt => info!(key = %cipher.key(), "Decrypting"),
    }
    let result = cipher.apply(&content, mode);

    // Write result to output file, or stdout
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &result)?;
            info!("Operation completed successfully! Output saved to: {}", path);
        }
        None => println!("{}", result),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_key_and_mode() {
        let cli = Cli::try_parse_from(["vigenere", "-f", "in.txt", "-k", "LEMON", "-m", "decrypt"])
            .unwrap();
        assert_eq!(cli.key, "LEMON");
        assert!(cli.output.is_none());
        assert_eq!(Mode::from(cli.mode), Mode::Decrypt);
    }

    #[test]
    fn test_cli_requires_mode() {
        assert!(Cli::try_parse_from(["vigenere", "-f", "in.txt", "-k", "LEMON"]).is_err());
    }
}
