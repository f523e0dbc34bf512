//! hubreach CLI -- generate route networks and count the routes a hub is
//! missing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod fmt;
pub mod input;
pub mod report;

#[derive(Debug, Parser)]
#[command(
    name = "hubreach",
    about = "Minimum new routes that make every airport reachable from a hub"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate random route networks
    Generate(GenerateArgs),
    /// Analyze a route network file
    Analyze(AnalyzeArgs),
    /// Analyze the built-in airline network
    Sample(SampleArgs),
    /// Format route-list (.routes) files
    Fmt(FmtArgs),
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of networks to generate
    #[arg(long)]
    pub n_net: u64,
    /// Number of airports per network
    #[arg(long)]
    pub n_airport: u64,
    /// Number of routes per network
    #[arg(long)]
    pub n_route: u64,
    /// Output directory for generated network files
    #[arg(long)]
    pub output_dir: PathBuf,
}

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// A `.json` network (or array of route pairs), or a route-list file
    pub file: PathBuf,
    /// Start airport to report; repeat for several. Defaults to every airport
    #[arg(long = "start")]
    pub starts: Vec<String>,
    /// Print components and suggested routes
    #[arg(long)]
    pub verbose: bool,
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Print components and suggested routes
    #[arg(long)]
    pub verbose: bool,
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    /// Route-list files, or directories searched for `.routes` files
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Check formatting without modifying files (exit 1 if unformatted)
    #[arg(long)]
    pub check: bool,
}
