use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Lists every simple route between two cities of a directed graph.", long_about = None)]
pub struct Cli {
    /// Graph description: `<count> <start> <end>` followed by `<from> <to>` pairs
    #[clap(default_value = "INPUT.TXT")]
    pub input: PathBuf,

    /// Start city, overriding the one declared in the input file
    #[clap(long)]
    pub start: Option<String>,

    /// End city, overriding the one declared in the input file
    #[clap(long)]
    pub end: Option<String>,

    /// Refuse graphs with more than this many cities
    #[clap(long)]
    pub max_nodes: Option<usize>,

    /// Do not explore routes longer than this many edges
    #[clap(long)]
    pub max_depth: Option<usize>,

    /// Fail if more than this many routes exist
    #[clap(long)]
    pub max_paths: Option<usize>,

    /// Also write the route report to this file
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose log destination
    #[clap(long, default_value = "route_finder.log")]
    pub log_file: PathBuf,

    /// Suppress verbose logging and the graph dump, only printing the routes.
    #[clap(short, long)]
    pub quiet: bool,
}
