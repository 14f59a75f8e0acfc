use ligcontact_featurizers::delete_excessive_files;
use std::path::PathBuf;

pub fn execute(path: PathBuf) -> anyhow::Result<()> {
    let report = delete_excessive_files(&path);
    println!(
        "removed {} files from {} directories",
        report.removed.len(),
        report.visited
    );
    println!("process is completed");
    Ok(())
}
