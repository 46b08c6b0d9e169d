// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use docktree::ResourceKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docktree")]
#[command(about = "Grouped and sorted tree views of container runtime resources")]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a descriptor listing as a tree
    Render {
        /// Resource kind: containers, images, volumes, or networks
        kind: ResourceKind,

        /// JSON array of descriptors from the Engine API ("-" for stdin)
        #[arg(short, long)]
        descriptors: PathBuf,

        /// Settings file (defaults to docktree.yml in the current directory)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Reference time for ages, in epoch seconds (defaults to now)
        #[arg(long)]
        now: Option<i64>,

        /// Print the tree as JSON
        #[arg(long, conflicts_with = "quiet")]
        json: bool,

        /// Print labels only
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the keys a resource kind accepts
    Keys {
        /// Resource kind: containers, images, volumes, or networks
        kind: ResourceKind,
    },

    /// Write a docktree.yml with every kind's defaults
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
