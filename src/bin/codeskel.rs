//! codeskel CLI - source skeleton extraction and codebase packing.
//!
//! Designed for both human users and AI agents: human output goes to
//! stdout with diagnostics on stderr, `--json` switches to
//! machine-readable output.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use codeskel::{
    concatenate, find_files, render_tree, skeleton, ConcatOptions, Lang, WalkOptions,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codeskel", version, about = "Extract source skeletons and pack codebases")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output JSON format (for agents)
    #[arg(long, global = true)]
    json: bool,

    /// Print progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract skeleton from a file or stdin
    Extract {
        /// File to extract (omit to read stdin)
        file: Option<PathBuf>,

        /// Language (auto-detected from extension if FILE is given)
        #[arg(short, long)]
        language: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Concatenate discovered files with skeleton extraction
    Concat {
        /// Root directory to process
        root: PathBuf,

        /// Include original content without skeleton extraction
        #[arg(long)]
        no_extract: bool,

        #[command(flatten)]
        shared: SharedArgs,
    },

    /// Show directory tree of discovered files
    Tree {
        /// Root directory to process
        root: PathBuf,

        /// Collapse directories with single children (e.g. main/java/com/example)
        #[arg(long)]
        collapse_single_dirs: bool,

        #[command(flatten)]
        shared: SharedArgs,
    },

    /// List discovered files
    Files {
        /// Root directory to process
        root: PathBuf,

        #[command(flatten)]
        shared: SharedArgs,
    },
}

#[derive(Args)]
struct SharedArgs {
    /// Don't recursively traverse directories
    #[arg(long)]
    no_recursive: bool,

    /// Add custom ignore pattern (gitignore syntax, repeatable)
    #[arg(short = 'I', long = "ignore-pattern")]
    ignore_patterns: Vec<String>,

    /// Disable built-in ignore patterns
    #[arg(long)]
    no_default_ignore: bool,

    /// Don't respect .gitignore files
    #[arg(long)]
    no_gitignore: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SharedArgs {
    fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            recursive: !self.no_recursive,
            ignore_patterns: self.ignore_patterns.clone(),
            use_default_ignore: !self.no_default_ignore,
            respect_gitignore: !self.no_gitignore,
        }
    }
}

#[derive(Serialize)]
struct ExtractOutput<'a> {
    language: &'a str,
    skeleton: &'a str,
}

#[derive(Serialize)]
struct ConcatOutput<'a> {
    root: String,
    files: usize,
    content: &'a str,
}

#[derive(Serialize)]
struct TreeOutput<'a> {
    root: String,
    tree: &'a str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "codeskel=debug" } else { "codeskel=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Extract {
            file,
            language,
            output,
        } => cmd_extract(file, language, output, cli.json),

        Commands::Concat {
            root,
            no_extract,
            shared,
        } => cmd_concat(&root, no_extract, &shared, cli.json),

        Commands::Tree {
            root,
            collapse_single_dirs,
            shared,
        } => cmd_tree(&root, collapse_single_dirs, &shared, cli.json),

        Commands::Files { root, shared } => cmd_files(&root, &shared, cli.json),
    }
}

fn cmd_extract(
    file: Option<PathBuf>,
    language: Option<String>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let (source, lang) = match file {
        Some(path) => {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("could not read {}", path.display()))?;
            let lang = match language {
                Some(name) => parse_language(&name)?,
                None => Lang::from_path(&path).with_context(|| {
                    format!(
                        "could not auto-detect language from {} (use -l/--language)",
                        path.display()
                    )
                })?,
            };
            (source, lang)
        }
        None => {
            let Some(name) = language else {
                bail!("language required when reading from stdin (use -l/--language)");
            };
            let source = std::io::read_to_string(std::io::stdin())
                .context("could not read stdin")?;
            (source, parse_language(&name)?)
        }
    };

    let skeleton = skeleton(&source, lang)?;
    let rendered = if json {
        serde_json::to_string_pretty(&ExtractOutput {
            language: lang.name(),
            skeleton: &skeleton,
        })?
    } else {
        skeleton
    };
    write_output(output.as_deref(), &rendered)
}

fn cmd_concat(root: &Path, no_extract: bool, shared: &SharedArgs, json: bool) -> Result<()> {
    let files = find_files(root, &shared.walk_options())?;
    if files.is_empty() {
        bail!("no files found under {}", root.display());
    }
    info!("discovered {} files", files.len());

    let options = ConcatOptions {
        extract: !no_extract,
        ignore_missing: true,
    };
    let content = concatenate(root, &files, &options)?;

    let rendered = if json {
        serde_json::to_string_pretty(&ConcatOutput {
            root: root.display().to_string(),
            files: files.len(),
            content: &content,
        })?
    } else {
        content
    };
    write_output(shared.output.as_deref(), &rendered)
}

fn cmd_tree(root: &Path, collapse: bool, shared: &SharedArgs, json: bool) -> Result<()> {
    let files = find_files(root, &shared.walk_options())?;
    if files.is_empty() {
        bail!("no files found under {}", root.display());
    }

    let tree = render_tree(&files, collapse);
    let rendered = if json {
        serde_json::to_string_pretty(&TreeOutput {
            root: root.display().to_string(),
            tree: &tree,
        })?
    } else {
        tree
    };
    write_output(shared.output.as_deref(), &rendered)
}

fn cmd_files(root: &Path, shared: &SharedArgs, json: bool) -> Result<()> {
    let files = find_files(root, &shared.walk_options())?;
    if files.is_empty() {
        bail!("no files found under {}", root.display());
    }

    let rendered = if json {
        serde_json::to_string_pretty(&files)?
    } else {
        files.join("\n")
    };
    write_output(shared.output.as_deref(), &rendered)
}

fn parse_language(name: &str) -> Result<Lang> {
    Lang::from_name(name).with_context(|| {
        format!(
            "language '{}' not supported (supported: {})",
            name,
            Lang::supported()
        )
    })
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
