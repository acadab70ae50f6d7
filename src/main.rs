//! brace CLI
//!
//! Command-line interface for the brace parser. Input files hold tokens
//! separated by whitespace.
//!
//! ```text
//! brace program.tok            Parse a program and dump its AST
//! brace --print program.tok    Parse and print canonical token text
//! brace --tokens program.tok   Show each token and its category
//! brace                        Start interactive REPL
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use brace_lang::config::{DEFAULT_DECL_KEYWORD, DEFAULT_MAX_DEPTH};
use brace_lang::{Diagnostic, Node, ParserConfig, Printer, TokenStream, VERSION};
use clap::Parser;
use log::{info, LevelFilter};

#[derive(Parser)]
#[command(name = "brace")]
#[command(version = VERSION)]
#[command(about = "Parse pre-tokenized brace programs into an AST", long_about = None)]
struct Cli {
    /// Token file to parse; starts a REPL when omitted
    file: Option<PathBuf>,

    /// Show tokens and their categories instead of parsing
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed program as canonical token text instead of the AST dump
    #[arg(short, long)]
    print: bool,

    /// Keyword that introduces a declaration
    #[arg(long, default_value = DEFAULT_DECL_KEYWORD)]
    decl_keyword: String,

    /// Maximum nesting depth before parsing fails
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_decl_keyword(self.decl_keyword.clone())
            .with_max_depth(self.max_depth)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = cli.config().validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(2);
    }

    let Some(file) = cli.file.as_ref() else {
        println!("brace v{} - Parser REPL", VERSION);
        println!("Type 'exit' to quit\n");
        repl(&cli);
        return;
    };

    let result = if cli.tokens {
        show_file_tokens(file, &cli.config())
    } else {
        parse_file(file, &cli)
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Warn by default; RUST_LOG still takes precedence
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_tokens(path: &Path) -> Result<TokenStream, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;

    let stream = TokenStream::from_whitespace(&text);
    info!("Read {} tokens from '{}'", stream.remaining(), path.display());
    Ok(stream)
}

/// Parse a token file as a program
fn parse_file(path: &Path, cli: &Cli) -> Result<(), String> {
    let config = cli.config();
    let stream = read_tokens(path)?;
    let tokens = stream.tokens().to_vec();
    let filename = path.display().to_string();

    let program = brace_lang::Parser::with_config(stream, config.clone())
        .parse_program()
        .map_err(|e| {
            Diagnostic::new(&e)
                .with_tokens(&tokens)
                .with_filename(&filename)
                .to_string()
        })?;

    print_node(&program, cli.print, &config);
    Ok(())
}

/// Show tokens from a file with their inferred categories
fn show_file_tokens(path: &Path, config: &ParserConfig) -> Result<(), String> {
    let stream = read_tokens(path)?;

    println!("Tokens for '{}':", path.display());
    println!("{}", "=".repeat(60));

    for (i, token) in stream.tokens().iter().enumerate() {
        println!(
            "{:4}: {:20} | {:?}",
            i,
            token.category(&config.decl_keyword).to_string(),
            token.as_str()
        );
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", stream.remaining());

    Ok(())
}

fn print_node(node: &Node, canonical: bool, config: &ParserConfig) {
    if canonical {
        println!("{}", Printer::with_decl_keyword(config.decl_keyword.clone()).render(node));
    } else {
        println!("{:#?}", node);
    }
}

/// Start an interactive REPL; every line is parsed as one statement
fn repl(cli: &Cli) {
    let config = cli.config();
    let mut line_number = 1;

    loop {
        print!("brace:{} > ", line_number);
        if let Err(e) = io::stdout().flush() {
            eprintln!("Error writing prompt: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                let stream = TokenStream::from_whitespace(input);
                let tokens = stream.tokens().to_vec();
                let mut parser = brace_lang::Parser::with_config(stream, config.clone());

                match parser.parse_standalone_statement() {
                    Ok(node) => print_node(&node, cli.print, &config),
                    Err(e) => eprint!("{}", Diagnostic::new(&e).with_tokens(&tokens)),
                }

                line_number += 1;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
