use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rotcipher::{
    DEFAULT_HASH_BASE, DEFAULT_HASH_SIZE, DEFAULT_ROTATION, Outcome, Session, SessionConfig,
};

#[derive(Parser)]
#[command(name = "rotcipher")]
#[command(author, version, about = "Band-rotation text cipher with a positional hash", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Rotation amount (any sign)
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROTATION, allow_negative_numbers = true)]
    rotation: i64,

    /// Hash base
    #[arg(short, long, global = true, default_value_t = DEFAULT_HASH_BASE, allow_negative_numbers = true)]
    base: i64,

    /// Hash modulus (must be non-zero)
    #[arg(long, global = true, default_value_t = DEFAULT_HASH_SIZE)]
    hash_size: u64,

    /// Reject characters outside the printable band and malformed ciphertext
    #[arg(short, long, global = true)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt a message and print its hash
    Encrypt {
        /// Plaintext message
        message: String,
    },
    /// Decrypt a message and check it against the expected hash
    Decrypt {
        /// Encrypted message
        message: String,

        /// Hash printed when the message was encrypted
        #[arg(long, value_name = "HASH")]
        hash: String,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let session = Session::new(SessionConfig {
        rotation: cli.rotation,
        hash_base: cli.base,
        hash_size: cli.hash_size,
        strict: cli.strict,
    });

    let result = match cli.command {
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout()).map(|_| ())
        }
        Some(Command::Encrypt { message }) => session
            .encrypt(&message)
            .and_then(Outcome::check)
            .map(|outcome| println!("{}", outcome)),
        Some(Command::Decrypt { message, hash }) => session
            .decrypt(&message, &hash)
            .and_then(Outcome::check)
            .map(|outcome| println!("{}", outcome)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
