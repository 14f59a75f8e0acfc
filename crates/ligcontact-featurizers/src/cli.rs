use super::commands;
use clap::{Parser, Subcommand};
use ligcontact_core::DEFAULT_CUTOFF;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate distance-weighted atomic contact features for protein-ligand complexes
    Featurize {
        /// Directory holding one subdirectory per complex
        path: PathBuf,

        #[arg(short, long, default_value = "data.pickle")]
        output: PathBuf,

        /// Step between successive shell lower bounds; shells stay 0.5 wide
        #[arg(long, default_value_t = DEFAULT_CUTOFF)]
        cutoff: f64,

        #[arg(long, default_value = "mol2")]
        ligand_ext: String,

        #[arg(long, default_value = "pdb")]
        protein_ext: String,

        /// Abort on the first complex that cannot be featurized
        #[arg(long)]
        fail_fast: bool,

        /// Worker threads; 1 is sequential, 0 uses every core
        #[arg(short = 'j', long, default_value_t = 1)]
        threads: usize,
    },
    /// Delete *.sdf and *_pocket.pdb files from every directory of a dataset tree
    Clean {
        /// Dataset root
        path: PathBuf,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Featurize {
                path,
                output,
                cutoff,
                ligand_ext,
                protein_ext,
                fail_fast,
                threads,
            } => commands::featurize::execute(commands::featurize::FeaturizeArgs {
                path,
                output,
                cutoff,
                ligand_ext,
                protein_ext,
                fail_fast,
                threads,
            }),
            Commands::Clean { path } => commands::clean::execute(path),
        }
    }
}
