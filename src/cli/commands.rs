//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seoinject")]
#[command(about = "Inject SEO and social meta tags into static HTML pages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print every step, including unchanged pages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize page files, then rewrite the head of every configured page
    Apply {
        /// Site directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Page table to use instead of <PATH>/seo.toml or the built-in one
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Do not rename or copy page.html files
        #[arg(long)]
        skip_normalize: bool,
    },

    /// Rename the root page.html to index.html and copy subdirectory pages
    Normalize {
        /// Site directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Report what would change without touching files
        #[arg(long)]
        dry_run: bool,
    },

    /// List the configured pages
    Pages {
        /// Site directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the rewritten HTML of one configured page to stdout
    Render {
        /// Page path relative to the site root (e.g., agenda/page.html)
        page: String,

        /// Read HTML from this file instead of the page under --root
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Site directory (default: current directory)
        #[arg(long, default_value = ".")]
        root: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
