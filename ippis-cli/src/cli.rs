//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ippis")]
#[command(about = "Search, filter, sort and page IPPIS admin tables", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write a debug log to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the screen presets with their columns and filters
    Screens,
    /// Print one page of a table
    Show(ShowArgs),
    /// Work with a table interactively, one command per line
    Browse(BrowseArgs),
}

/// Where the rows come from and how the table is set up.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// JSON file holding an array of records
    #[arg(short, long)]
    pub data: PathBuf,

    /// Screen preset giving the columns and filters
    #[arg(short, long, default_value = "assets")]
    pub screen: String,

    /// Table config file (defaults to table.json in the config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Longest cell, in terminal columns
    #[arg(long, default_value_t = 32)]
    pub max_width: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Free-text search term
    #[arg(long)]
    pub search: Option<String>,

    /// Filter as ID=VALUE; repeatable
    #[arg(short, long = "filter", value_name = "ID=VALUE")]
    pub filters: Vec<String>,

    /// Click a column header; repeat to flip or clear the sort
    #[arg(long = "sort", value_name = "KEY")]
    pub sorts: Vec<String>,

    /// Page to show
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page
    #[arg(long)]
    pub per_page: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub table: TableArgs,
}
