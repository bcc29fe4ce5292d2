use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use affine_decrypter::{cipher, find_possible_plaintext, Key, ResultSet, WordBank};

/// Command-line arguments for the affine cipher program.
#[derive(Parser, Debug)]
#[command(version, about = "Encrypt, decrypt or brute-force text with the affine cipher")]
struct Cli {
    /// Path to the input file
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Mode of operation
    #[arg(short, long, value_enum, default_value_t = OperationMode::Crack)]
    mode: OperationMode,

    /// Word bank used to score candidates when cracking
    #[arg(short, long, help = "Path to the word bank (one word per line)")]
    words: Option<String>,

    /// Size of the alphabet (modulus)
    #[arg(short, long, default_value_t = 26)]
    alphabet_size: u32,

    /// Shift of an explicit key
    #[arg(short, long, help = "Shift of the key (encrypt/decrypt)")]
    shift: Option<u32>,

    /// Multiplier of an explicit key
    #[arg(short = 'k', long, help = "Multiplier of the key (encrypt/decrypt)")]
    multiplier: Option<u32>,

    /// Path to the output file; stdout when omitted
    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Search every key and print the best plaintexts
    Crack,
    /// Encrypt with the given key
    Encrypt,
    /// Decrypt with the given key
    Decrypt,
}

/// Main entry point for the affine cipher program.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;

    let result = match cli.mode {
        OperationMode::Crack => {
            let Some(words) = cli.words.as_deref() else {
                bail!("--words is required in crack mode");
            };
            let word_bank = WordBank::load(words)
                .with_context(|| format!("Failed to load word bank {words}"))?;
            info!("Loaded {} words", word_bank.len());

            let results = find_possible_plaintext(&content, &word_bank, cli.alphabet_size)?;
            render(&results)
        }
        OperationMode::Encrypt => {
            let key = explicit_key(&cli)?;
            info!("Encrypting with shift {} and multiplier {}", key.shift(), key.multiplier());
            cipher::encrypt(&content, &key)
        }
        OperationMode::Decrypt => {
            let key = explicit_key(&cli)?;
            info!("Decrypting with shift {} and multiplier {}", key.shift(), key.multiplier());
            cipher::decrypt(&content, &key)
        }
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &result)
                .with_context(|| format!("Failed to write output file {path}"))?;
            info!("Output saved to: {path}");
        }
        None => print!("{result}"),
    }

    Ok(())
}

/// Builds the key given by `--shift` and `--multiplier`.
fn explicit_key(cli: &Cli) -> Result<Key> {
    let (Some(shift), Some(multiplier)) = (cli.shift, cli.multiplier) else {
        bail!("--shift and --multiplier are required to encrypt or decrypt");
    };
    Ok(Key::new(shift, multiplier, cli.alphabet_size)?)
}

/// Formats the best candidates, one block per plaintext, each printed as
/// decrypted (surrounding whitespace included).
fn render(results: &ResultSet) -> String {
    let mut out = String::new();

    if results.len() > 1 {
        out.push_str("There are several possible plaintext.\n");
        for (i, candidate) in results.candidates().iter().enumerate() {
            info!(
                "Candidate {i}: shift={} multiplier={} score={}",
                candidate.key.shift(),
                candidate.key.multiplier(),
                candidate.score
            );
            out.push_str(&format!("Possible plaintext {i}:\n{}\n", candidate.plaintext));
        }
    } else {
        for candidate in results.candidates() {
            info!(
                "Best key: shift={} multiplier={} score={}",
                candidate.key.shift(),
                candidate.key.multiplier(),
                candidate.score
            );
            out.push_str(&format!("Possible plaintext:\n{}\n", candidate.plaintext));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single() {
        let bank = WordBank::from_words(["the", "cat", "sat"]);
        let results = find_possible_plaintext("  umx ndu pdu\n", &bank, 26).unwrap();
        assert_eq!(render(&results), "Possible plaintext:\n  the cat sat\n\n");
    }

    #[test]
    fn test_render_several() {
        let bank = WordBank::from_words(["ab", "ba"]);
        let results = find_possible_plaintext("ab", &bank, 2).unwrap();
        assert_eq!(
            render(&results),
            "There are several possible plaintext.\n\
             Possible plaintext 0:\nab\n\
             Possible plaintext 1:\nba\n"
        );
    }

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["affine_decrypter", "-f", "in.txt", "-w", "words.txt"]);
        assert!(matches!(cli.mode, OperationMode::Crack));
        assert_eq!(cli.alphabet_size, 26);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_explicit_key_requires_both_parts() {
        let cli = Cli::parse_from(["affine_decrypter", "-f", "in.txt", "-m", "encrypt", "-s", "3"]);
        assert!(explicit_key(&cli).is_err());

        let cli = Cli::parse_from([
            "affine_decrypter", "-f", "in.txt", "-m", "encrypt", "-s", "3", "-k", "3", "-a", "3",
        ]);
        assert!(explicit_key(&cli).is_err());

        let cli = Cli::parse_from([
            "affine_decrypter", "-f", "in.txt", "-m", "encrypt", "-s", "3", "-k", "5",
        ]);
        let key = explicit_key(&cli).unwrap();
        assert_eq!((key.shift(), key.multiplier()), (3, 5));
    }
}
