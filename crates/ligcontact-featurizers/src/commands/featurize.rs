use anyhow::Context;
use ligcontact_core::ShellConfig;
use ligcontact_featurizers::{featurize_dataset, ErrorPolicy, FeaturizeOptions};
use log::warn;
use std::path::PathBuf;

pub struct FeaturizeArgs {
    pub path: PathBuf,
    pub output: PathBuf,
    pub cutoff: f64,
    pub ligand_ext: String,
    pub protein_ext: String,
    pub fail_fast: bool,
    pub threads: usize,
}

pub fn execute(args: FeaturizeArgs) -> anyhow::Result<()> {
    let options = FeaturizeOptions {
        shells: ShellConfig::new(args.cutoff)?,
        ligand_extension: args.ligand_ext,
        protein_extension: args.protein_ext,
        policy: if args.fail_fast {
            ErrorPolicy::FailFast
        } else {
            ErrorPolicy::Skip
        },
        threads: args.threads,
    };

    let report = featurize_dataset(&args.path, &options)
        .with_context(|| format!("featurizing {}", args.path.display()))?;

    if !report.failures.is_empty() {
        warn!("{} complexes were skipped:", report.failures.len());
        for failure in &report.failures {
            warn!("  {}: {}", failure.name, failure.error);
        }
    }

    report
        .features
        .write_pickle(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "wrote features for {} complexes to {}",
        report.features.len(),
        args.output.display()
    );
    println!("process is completed");
    Ok(())
}
