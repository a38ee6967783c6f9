use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Document reading analytics.
///
/// Loads a line-delimited JSON reading log and runs one task over it.
#[derive(Parser, Debug)]
#[command(name = "docreads", about = "Document reading analytics")]
pub struct CliArgs {
    /// Reading log (.json, one record per line). Falls back to DOCREADS_DATA_FILE.
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Task: 2a countries, 2b continents, 3a user agents, 3b browsers,
    /// 4 top readers, 5 also-likes, 6 also-likes graph
    #[arg(short = 't', long = "task")]
    pub task: Option<String>,

    /// Document id for tasks 2a, 2b, 5 and 6
    #[arg(short = 'd', long = "doc")]
    pub document: Option<String>,

    /// Visitor id to leave out of also-likes (tasks 5 and 6)
    #[arg(short = 'u', long = "user")]
    pub visitor: Option<String>,

    /// Number of results for tasks 4, 5 and 6 (overrides config)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Skip malformed lines instead of failing the load
    #[arg(long)]
    pub skip_malformed: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the task 6 graph to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Also-likes ranking strategy
    #[arg(long, value_enum, default_value_t = RankingArg::PairCount)]
    pub ranking: RankingArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankingArg {
    /// Most frequent (visitor, document) pairs
    PairCount,
    /// Documents with the most distinct co-readers
    DocumentPopularity,
}
