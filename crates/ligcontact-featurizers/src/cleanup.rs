use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

const SDF_SUFFIX: &str = ".sdf";
const POCKET_SUFFIX: &str = "_pocket.pdb";

#[derive(Debug, Default)]
pub struct CleanupReport {
    pub visited: usize,
    pub removed: Vec<PathBuf>,
}

/// Walk `root` and every directory below it; in each, delete the first `*.sdf` and the
/// first `*_pocket.pdb` (by name) if present.
///
/// Never fails: unreadable directories and failed deletions are logged and skipped.
/// Symlinked directories are not followed.
pub fn delete_excessive_files(root: &Path) -> CleanupReport {
    let mut report = CleanupReport::default();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        match fs::read_dir(&dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let Ok(file_type) = entry.file_type() else {
                        continue;
                    };
                    if file_type.is_dir() {
                        subdirs.push(entry.path());
                    } else {
                        files.push(entry.file_name().to_string_lossy().into_owned());
                    }
                }
            }
            Err(e) => {
                warn!("cannot read {}: {}", dir.display(), e);
                continue;
            }
        }
        report.visited += 1;
        files.sort();

        for suffix in [SDF_SUFFIX, POCKET_SUFFIX] {
            let Some(name) = files
                .iter()
                .find(|name| !name.starts_with('.') && name.ends_with(suffix))
            else {
                continue;
            };
            let path = dir.join(name);
            match fs::remove_file(&path) {
                Ok(()) => {
                    debug!("removed {}", path.display());
                    report.removed.push(path);
                }
                Err(e) => warn!("cannot remove {}: {}", path.display(), e),
            }
        }

        // reverse so that the stack visits subdirectories in name order
        subdirs.sort();
        pending.extend(subdirs.into_iter().rev());
    }

    info!(
        "visited {} directories, removed {} files",
        report.visited,
        report.removed.len()
    );
    report
}
