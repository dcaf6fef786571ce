use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use tiny::{
    ast::printer::print_tree,
    lexer::{lexer::tokenize, source::TokenStream},
    parser::parser::parse,
    render_error,
};
use tracing_subscriber::EnvFilter;

/// Parse a TINY program and print its syntax tree
#[derive(Parser, Debug)]
#[command(name = "tiny", version)]
struct Args {
    /// Source file to parse
    file: PathBuf,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,

    /// Do not print the syntax tree
    #[arg(long)]
    no_tree: bool,
}

fn main() -> ExitCode {
    // RUST_LOG controls verbosity, warnings only by default
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args.file.display(), err);
            return ExitCode::FAILURE;
        }
    };
    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), file_name) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", error);
            eprint!("{}", render_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in &tokens {
            println!("\t{}: {}", token.line(), token.describe());
        }
    }

    let parse_start = Instant::now();
    let output = parse(TokenStream::new(tokens));

    tracing::info!("Parsed in {:?}", parse_start.elapsed());

    for error in &output.diagnostics {
        eprintln!("{}", error);
        eprint!("{}", render_error(error, &source));
    }

    if !args.no_tree {
        println!("Syntax tree:");
        print!("{}", print_tree(output.root.as_deref()));
    }

    if output.had_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
