use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "atlas")]
#[command(about = "Query and merge cities of a country described in a TOML file")]
pub struct CliConfig {
    /// Path to the country description file
    pub country_file: String,

    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print every city of the country
    Show,
    /// Print the total number of residents
    Residents,
    /// Print the greedy longest-distance estimate between city centers
    Longest {
        /// Use the exhaustive all-pairs maximum instead of the greedy scan
        #[arg(long)]
        exact: bool,
    },
    /// List the cities whose centers lie north of the named city
    NorthOf { city: String },
    /// Print the southernmost city
    Southernmost,
    /// Merge two cities and print the result
    Unify { city1: String, city2: String },
}
