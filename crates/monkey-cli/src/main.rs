use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use monkey_cli::{check_strict, load_source, render_json, render_pretty, LexReport};
use monkey_lex::tokenize;

#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(about = "Monkey: tokenize source files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a source file and dump the tokens
    Lex {
        /// Path to .monkey source file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,

        /// Fail on the first illegal character
        #[arg(long)]
        strict: bool,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum Format {
    Pretty,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lex {
            file,
            format,
            strict,
        } => cmd_lex(&file, format, strict),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn cmd_lex(file: &str, format: Format, strict: bool) -> Result<()> {
    let src = load_source(file)?;
    let tokens = tokenize(&src);

    if strict {
        check_strict(&tokens)?;
    }

    match format {
        Format::Pretty => print!("{}", render_pretty(&tokens)),
        Format::Json => println!("{}", render_json(&LexReport::new(file, &tokens))?),
    }

    Ok(())
}
