use std::{path::PathBuf, time::Instant};

use anyhow::bail;
use clap::Parser;
use log::{debug, info};

use lexcheck::{
    analyze_file,
    config::{AnalysisConfig, Limits, DEFAULT_MAX_COMMENTS, DEFAULT_MAX_DECLARATIONS, DEFAULT_MAX_DIAGNOSTICS, DEFAULT_MAX_TOKENS},
    context::AnalysisContext,
    report::report::{render, render_error},
};

/// Lexical analyzer and heuristic checker for Java and Kotlin sources
#[derive(Parser, Debug)]
#[command(name = "lexcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer and heuristic checker for Java and Kotlin sources", long_about = None)]
struct Cli {
    /// Source files to analyze, one run per file
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Sort the symbol table by line and lexeme (false keeps scan order)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    sorted: bool,

    /// Maximum number of tokens recorded per file
    #[arg(long, env = "LEXCHECK_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: usize,

    /// Maximum number of comments recorded per file
    #[arg(long, env = "LEXCHECK_MAX_COMMENTS", default_value_t = DEFAULT_MAX_COMMENTS)]
    max_comments: usize,

    /// Maximum number of diagnostics recorded per file
    #[arg(long, env = "LEXCHECK_MAX_DIAGNOSTICS", default_value_t = DEFAULT_MAX_DIAGNOSTICS)]
    max_diagnostics: usize,

    /// Maximum number of declarations recorded per file
    #[arg(long, env = "LEXCHECK_MAX_DECLARATIONS", default_value_t = DEFAULT_MAX_DECLARATIONS)]
    max_declarations: usize,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            limits: Limits {
                max_tokens: self.max_tokens,
                max_comments: self.max_comments,
                max_diagnostics: self.max_diagnostics,
                max_declarations: self.max_declarations,
            },
            sorted_symbols: self.sorted,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.config();
    debug!("using {:?}", config);

    let mut ctx = AnalysisContext::new(config.limits);
    let mut failed = vec![];

    for path in &cli.files {
        let start = Instant::now();
        let file_name = path.to_string_lossy();

        match analyze_file(path, &mut ctx) {
            Ok(source) => {
                info!("analyzed {} in {:?}", file_name, start.elapsed());
                println!("{}", file_name);
                print!("{}", render(&ctx, &file_name, &source, &config));
            }
            Err(error) => {
                eprint!("{}", render_error(&error));
                failed.push(file_name.into_owned());
            }
        }
    }

    if !failed.is_empty() {
        bail!("could not analyze {}", failed.join(", "));
    }

    Ok(())
}
