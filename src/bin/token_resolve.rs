//! Command line front-end for token stores.
//!
//! Reads a token document (JSON, or YAML by `.yaml`/`.yml` extension),
//! validates it and resolves references. `RUST_LOG=debug` shows resolver
//! activity.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use token_resolver::{
    validate_all, CancellationToken, ResolverConfig, TokenResolver, TokenStore,
};

/// Serialization format for exported stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Validate, inspect and resolve design token documents.
#[derive(Parser)]
#[command(name = "token-resolve", version, about)]
struct Cli {
    /// Resolver configuration file (JSON or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a token document and report every structural error
    Validate {
        /// Token document
        file: PathBuf,
    },

    /// Print the raw value at a path without resolving it
    Get {
        /// Token document
        file: PathBuf,
        /// Path such as semantic.colors.primary
        path: String,
    },

    /// Resolve one or more references (compound values included)
    Resolve {
        /// Token document
        file: PathBuf,
        /// References or values to resolve
        #[arg(required = true)]
        references: Vec<String>,
        /// Also print the chain of paths followed to reach the value
        #[arg(long)]
        trace: bool,
    },

    /// Print the document with every reference resolved
    Export {
        /// Token document
        file: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },

    /// Print the built-in token set
    Defaults {
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
        /// Resolve every reference before printing
        #[arg(long)]
        resolved: bool,
    },
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parses without validating so `validate` can report every error.
fn parse_unchecked(path: &Path) -> Result<TokenStore> {
    let text = read(path)?;
    let store: TokenStore = if is_yaml(path) {
        serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse YAML token document {}", path.display()))?
    } else {
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse JSON token document {}", path.display()))?
    };
    Ok(store)
}

fn load_store(path: &Path) -> Result<TokenStore> {
    let text = read(path)?;
    let store = if is_yaml(path) {
        TokenStore::from_yaml(&text)
    } else {
        TokenStore::from_json(&text)
    };
    store.with_context(|| format!("invalid token document {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<ResolverConfig> {
    let Some(path) = path else {
        return Ok(ResolverConfig::default());
    };
    let text = read(path)?;
    let config = if is_yaml(path) {
        ResolverConfig::from_yaml(&text)
    } else {
        ResolverConfig::from_json(&text)
    };
    config.with_context(|| format!("invalid resolver config {}", path.display()))
}

fn render(store: &TokenStore, format: Format) -> Result<String> {
    let text = match format {
        Format::Json => store.to_json()?,
        Format::Yaml => store.to_yaml()?,
    };
    Ok(text)
}

/// Output lines for one `resolve` argument.
///
/// The value is always compound-expanded. With `trace`, the paths followed
/// from the top-level reference are listed under it.
fn resolve_lines(
    resolver: &TokenResolver,
    ctx: &CancellationToken,
    reference: &str,
    trace: bool,
) -> Result<Vec<String>> {
    let value = resolver.resolve_compound(ctx, reference)?;
    if !trace {
        return Ok(vec![value]);
    }

    let traced = resolver.resolve_traced(ctx, reference)?;
    let mut lines = vec![format!("{} = {}", reference, value)];
    lines.extend(traced.chain.iter().map(|hop| format!("  <- {}", hop)));
    Ok(lines)
}

fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let ctx = CancellationToken::new();

    match cli.command {
        Commands::Validate { file } => {
            let store = parse_unchecked(&file)?;
            let errors = validate_all(&store);
            if errors.is_empty() {
                println!("{}: ok ({} tokens)", file.display(), store.len());
                return Ok(true);
            }
            for err in &errors {
                eprintln!("[{}] {}", err.kind(), err);
            }
            eprintln!("{}: {} error(s)", file.display(), errors.len());
            Ok(false)
        }

        Commands::Get { file, path } => {
            let store = load_store(&file)?;
            println!("{}", store.get_token(&path)?);
            Ok(true)
        }

        Commands::Resolve {
            file,
            references,
            trace,
        } => {
            let resolver = TokenResolver::with_config(load_store(&file)?, config)?;
            for reference in &references {
                for line in resolve_lines(&resolver, &ctx, reference, trace)? {
                    println!("{}", line);
                }
            }
            Ok(true)
        }

        Commands::Export { file, format } => {
            let resolver = TokenResolver::with_config(load_store(&file)?, config)?;
            println!("{}", render(&resolver.resolve_all(&ctx)?, format)?.trim_end());
            Ok(true)
        }

        Commands::Defaults { format, resolved } => {
            let store = if resolved {
                TokenResolver::with_config(TokenStore::defaults(), config)?.resolve_all(&ctx)?
            } else {
                TokenStore::defaults()
            };
            println!("{}", render(&store, format)?.trim_end());
            Ok(true)
        }
    }
}

fn main() {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(2);
        }
    }
}
