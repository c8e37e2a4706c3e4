use clap::{ArgAction, Parser as ClapParser, Subcommand};
use qclause::cli::{self, CheckOptions, CliError};
use std::io::{self, Read};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(ClapParser)]
#[command(name = "qclause")]
#[command(about = "qclause - Compile compact filter queries into ordered clause records")]
#[command(version)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its clauses as JSON
    Check {
        /// The query to parse (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Coerce a single raw value and print it with its type
    Value {
        /// The raw value, e.g. 2.1, true or "2023-04-09"
        raw: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'qclause docs' to list categories)
        category: String,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check { query, pretty } => run_check(query, pretty),
        Commands::Value { raw, pretty } => cli::execute_value(&raw, pretty).map(|json| {
            println!("{}", json);
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(query: Option<String>, pretty: bool) -> Result<(), CliError> {
    let query = match query {
        Some(q) => Some(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions { query, pretty };
    println!("{}", cli::execute_check(&options)?);
    Ok(())
}
