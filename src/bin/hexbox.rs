//! Hexbox CLI - Keyed hex-armored text and file transformation
//!
//! Command-line interface for encrypting and decrypting text and files
//! using a keystream XOR transform with hex-armored output. Text
//! subcommands use the built-in demo key; file subcommands take a key from
//! the terminal or stdin.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use hexbox::file_ops;
use hexbox::keyreader::{KeyReader, ReaderKeyReader, TerminalKeyReader};
use hexbox::textcrypt;

#[derive(Parser)]
#[command(name = "hexbox")]
#[command(version)]
#[command(about = "Keyed hex-armored text and file transformation.", long_about = None)]
struct Cli {
    /// Read key from stdin instead of from terminal
    #[arg(long, global = true)]
    key_stdin: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file
    #[command(alias = "e")]
    Encrypt {
        /// Path to the file whose contents is to be encrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the armored hex text to
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Decrypt a file
    #[command(alias = "d")]
    Decrypt {
        /// Path to the file whose contents is to be decrypted
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Path to the file to write the recovered bytes to
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Encrypt text with the built-in demo key, printing the armored hex
    /// form to stdout
    EncryptText {
        /// Text to encrypt
        text: String,
    },

    /// Decrypt armored hex text produced with the built-in demo key,
    /// printing the recovered text to stdout
    DecryptText {
        /// Armored hex text to decrypt
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encrypt { input, output } => {
            let mut reader = get_key_reader(cli.key_stdin);
            file_ops::encrypt_file(&input, &output, &mut *reader)
        }
        Commands::Decrypt { input, output } => {
            let mut reader = get_key_reader(cli.key_stdin);
            file_ops::decrypt_file(&input, &output, &mut *reader)
        }
        Commands::EncryptText { text } => {
            println!("{}", textcrypt::encrypt_string(&text));
            Ok(())
        }
        Commands::DecryptText { text } => textcrypt::decrypt_string(&text).map(|plain| {
            println!("{}", plain);
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn get_key_reader(use_stdin: bool) -> Box<dyn KeyReader> {
    if use_stdin {
        Box::new(ReaderKeyReader::new(Box::new(std::io::stdin())))
    } else {
        Box::new(TerminalKeyReader)
    }
}
