use clap::{Parser, Subcommand};
use libueb::{decode, encode, table};
use tabled::Table;

#[derive(Debug, Subcommand)]
enum Commands {
    /// translate <INPUT> from text to UEB grade 1 braille
    #[command(arg_required_else_help = true)]
    Encode {
        /// Text to translate
        input: String,
    },
    /// translate <INPUT> from UEB grade 1 braille back to text
    #[command(arg_required_else_help = true)]
    Decode {
        /// Braille to translate
        input: String,
    },
    /// print the builtin symbol table
    Table,
}

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "ueb")]
#[command(about = "A command line tool to translate to and from UEB grade 1 braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    match args.command {
        Commands::Encode { input } => println!("{}", encode(&input)),
        Commands::Decode { input } => println!("{}", decode(&input)),
        Commands::Table => {
            let rows = table::mappings().expect("builtin symbol table is well-formed");
            println!("{}", Table::new(rows));
        }
    }
}
