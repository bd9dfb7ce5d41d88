use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use partition_lattice::lattice::LARGE_GROUND_SET;
use partition_lattice::partition::{GroundSet, Partition};

#[derive(Debug, Parser)]
#[command(name = "partition-lattice")]
#[command(version, about = "Explore the lattice of partitions of a small finite set")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every partition of the ground set
    Enumerate(GroundArgs),

    /// Print the cover relation (Hasse diagram edges) of the lattice
    Hasse {
        #[command(flatten)]
        ground: GroundArgs,

        /// Emit the partitions and edges as JSON
        #[arg(long)]
        json: bool,
    },

    /// Join and meet two partitions and check them against the lattice
    Join {
        /// First partition, e.g. "1 2 | 3 4"
        #[arg(long)]
        left: String,

        /// Second partition over the same elements, e.g. "1 3 | 2 4"
        #[arg(long)]
        right: String,
    },

    /// Show the generative effect of "A and B share a block" on two partitions
    Effect {
        /// First partition, e.g. "1 2 | 3 4"
        #[arg(long)]
        left: String,

        /// Second partition over the same elements
        #[arg(long)]
        right: String,

        /// The two elements to test
        #[arg(long, required = true, num_args = 2, value_names = ["A", "B"])]
        pair: Vec<String>,
    },

    /// Run the worked examples
    Demo,
}

#[derive(Debug, Args)]
pub struct GroundArgs {
    /// Elements of the ground set
    #[arg(value_name = "ELEMENTS", conflicts_with = "size")]
    pub elements: Vec<String>,

    /// Use the ground set {1, ..., N}
    #[arg(short = 'n', long, default_value_t = 4)]
    pub size: usize,
}

impl GroundArgs {
    pub fn ground(&self) -> Result<GroundSet<String>> {
        let ground = if self.elements.is_empty() {
            GroundSet::new((1..=self.size).map(|i| i.to_string()))
        } else {
            GroundSet::new(self.elements.iter().cloned())
        };

        if ground.len() > LARGE_GROUND_SET {
            bail!(
                "ground set has {} elements; at most {LARGE_GROUND_SET} are supported",
                ground.len()
            );
        }
        Ok(ground)
    }
}

/// Parse a partition written as blocks separated by `|`, elements separated by whitespace or
/// commas: `"1 2 | 3, 4"`.
pub fn parse_partition(input: &str) -> Result<Partition<String>> {
    let blocks: Vec<Vec<String>> = input
        .split('|')
        .map(|block| {
            block
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|x| !x.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect();

    Partition::from_blocks(blocks).with_context(|| format!("invalid partition '{input}'"))
}
