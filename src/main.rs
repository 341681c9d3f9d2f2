use clap::{Parser, Subcommand, ValueEnum};
use idgen_strings::{KindSet, StringGenerator, SymbolPool};
use idgen_uuid::Uuid4;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "idgen")]
#[command(about = "Random strings and version 4 UUIDs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Random string from a predefined pool
    #[command(name = "string")]
    Text {
        /// Symbol pool to draw from
        #[arg(long, value_enum, default_value_t = PoolArg::Alphanumeric)]
        pool: PoolArg,
        /// Number of symbols
        #[arg(short = 'n', long, env = "IDGEN_LENGTH", default_value_t = 21)]
        length: usize,
    },
    /// Random string from a union of character kinds
    Kind {
        /// Kind to include (repeatable)
        #[arg(short = 'k', long = "kind", value_enum, required = true)]
        kinds: Vec<KindArg>,
        /// Number of symbols
        #[arg(short = 'n', long, env = "IDGEN_LENGTH", default_value_t = 21)]
        length: usize,
    },
    /// Random string from the given symbols
    Pool {
        /// Symbols to draw from, e.g. "囧ABCxyz"
        symbols: String,
        /// Number of symbols
        #[arg(short = 'n', long, env = "IDGEN_LENGTH", default_value_t = 21)]
        length: usize,
    },
    /// Generate version 4 UUIDs
    Uuid {
        /// How many to generate
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Print without hyphens
        #[arg(long)]
        simple: bool,
    },
    /// Validate a UUID and print its canonical form
    Parse {
        /// Hyphenated or bare hex UUID
        text: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PoolArg {
    Unicode,
    Ascii,
    Alphabetic,
    Numeric,
    Alphanumeric,
}

impl PoolArg {
    fn symbol_pool(self) -> SymbolPool {
        match self {
            PoolArg::Unicode => SymbolPool::unicode(),
            PoolArg::Ascii => SymbolPool::ascii(),
            PoolArg::Alphabetic => SymbolPool::alphabetic(),
            PoolArg::Numeric => SymbolPool::numeric(),
            PoolArg::Alphanumeric => SymbolPool::alphanumeric(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Digits,
    Lower,
    Upper,
    Symbols,
    All,
}

impl KindArg {
    fn flag(self) -> KindSet {
        match self {
            KindArg::Digits => KindSet::DIGITS,
            KindArg::Lower => KindSet::LOWER,
            KindArg::Upper => KindSet::UPPER,
            KindArg::Symbols => KindSet::SYMBOLS,
            KindArg::All => KindSet::ALL,
        }
    }
}

/// Entry point for the `idgen` CLI.
///
/// Output goes to stdout, one value per line. Logs go to stderr.
///
/// # Environment Variables
/// - `IDGEN_LENGTH`: default length for the string commands (default: 21)
/// - `RUST_LOG`: log filter (default directive: `idgen=info`)
///
/// A `.env` file in the working directory is loaded first if present.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("idgen=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli.command, &mut stdout.lock())
}

/// Executes one command, writing its output to `out`.
///
/// # Errors
/// Returns an error for an empty pool or kind set, and `invalid identifier: <reason>` when
/// `parse` is given text that is not a version 4 UUID.
fn run(command: Commands, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!(?command, "running command");

    match command {
        Commands::Text { pool, length } => {
            let value = StringGenerator::new().random_with_pool(length, &pool.symbol_pool())?;
            writeln!(out, "{}", value)?;
        }
        Commands::Kind { kinds, length } => {
            let kinds = kinds
                .into_iter()
                .fold(KindSet::empty(), |acc, kind| acc | kind.flag());
            let value = StringGenerator::new().random_kind(length, kinds)?;
            writeln!(out, "{}", value)?;
        }
        Commands::Pool { symbols, length } => {
            let value = StringGenerator::new().random_from_str_pool(length, &symbols)?;
            writeln!(out, "{}", value)?;
        }
        Commands::Uuid { count, simple } => {
            for _ in 0..count {
                let uuid = Uuid4::generate();
                if simple {
                    writeln!(out, "{}", uuid.simple())?;
                } else {
                    writeln!(out, "{}", uuid)?;
                }
            }
        }
        Commands::Parse { text } => {
            let uuid = Uuid4::parse(&text)
                .map_err(|e| anyhow::anyhow!("invalid identifier: {}", e))?;
            writeln!(out, "{}", uuid)?;
        }
    }

    Ok(())
}
