use crate::{DatasetError, FeatureSet};
use ligcontact_core::{contact_features, AtomCollection, ShellConfig};
use ligcontact_io::read_first_molecule;
use log::{debug, info, warn};
use ndarray::Array2;
use pdbtbx::{Format, ReadOptions, StrictnessLevel};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log the failing complex, leave it out of the output and carry on.
    #[default]
    Skip,
    /// Stop at the first failing complex; nothing is written.
    FailFast,
}

#[derive(Debug, Clone)]
pub struct FeaturizeOptions {
    pub shells: ShellConfig,
    /// Extension of the ligand structure file, without the dot.
    pub ligand_extension: String,
    /// Extension of the protein structure file, without the dot.
    pub protein_extension: String,
    pub policy: ErrorPolicy,
    /// 1 runs complexes sequentially; 0 uses one worker per core.
    pub threads: usize,
}

impl Default for FeaturizeOptions {
    fn default() -> Self {
        Self {
            shells: ShellConfig::default(),
            ligand_extension: "mol2".to_string(),
            protein_extension: "pdb".to_string(),
            policy: ErrorPolicy::default(),
            threads: 1,
        }
    }
}

/// One loaded protein-ligand pair.
pub struct Complex {
    pub name: String,
    pub ligand: AtomCollection,
    pub protein: AtomCollection,
}

#[derive(Debug)]
pub struct ComplexFailure {
    pub name: String,
    pub error: DatasetError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub features: FeatureSet,
    pub failures: Vec<ComplexFailure>,
}

/// The single regular file in `dir` named `*.<extension>`.
///
/// Hidden files are ignored. Zero matches is `MissingFile`, several is
/// `AmbiguousFile`: a dataset directory that still holds e.g. a `_pocket.pdb`
/// next to the protein must be cleaned before it can be featurized.
pub fn resolve_single_file(dir: &Path, extension: &str) -> Result<PathBuf, DatasetError> {
    let entries = fs::read_dir(dir).map_err(|e| DatasetError::io(dir, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DatasetError::io(dir, e))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden || !path.is_file() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == extension) {
            candidates.push(path);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(DatasetError::MissingFile {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(DatasetError::AmbiguousFile {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
            candidates,
        }),
    }
}

fn warn_unresolved(path: &Path, atoms: &AtomCollection) {
    let count = atoms.unresolved_count();
    if count > 0 {
        warn!(
            "{}: {} of {} atoms match no feature element and are excluded ({})",
            path.display(),
            count,
            atoms.get_size(),
            atoms.unresolved_atom_names().join(", ")
        );
    }
}

/// Protein `ATOM` records of a PDB file, elements taken from the atom-name table.
///
/// Only coordinate records are lexed, so non-standard `HEADER` or free-text
/// `REMARK` lines (as written by SYBYL) do not reject the file.
pub fn load_protein(path: &Path) -> Result<AtomCollection, DatasetError> {
    let (pdb, warnings) = ReadOptions::default()
        .set_format(Format::Pdb)
        .set_level(StrictnessLevel::Loose)
        .set_only_atomic_coords(true)
        .read(path.to_string_lossy())
        .map_err(|errors| DatasetError::Protein {
            path: path.to_path_buf(),
            messages: errors.iter().map(|e| e.to_string()).collect(),
        })?;
    if !warnings.is_empty() {
        debug!("{}: {} pdbtbx warnings", path.display(), warnings.len());
    }
    let atoms = AtomCollection::from(&pdb);
    warn_unresolved(path, &atoms);
    Ok(atoms)
}

/// Atoms of the first molecule of a MOL2 file, elements taken from the SYBYL type.
pub fn load_ligand(path: &Path) -> Result<AtomCollection, DatasetError> {
    let molecule = read_first_molecule(path).map_err(|source| DatasetError::Ligand {
        path: path.to_path_buf(),
        source,
    })?;
    let atoms = AtomCollection::from(&molecule);
    warn_unresolved(path, &atoms);
    Ok(atoms)
}

fn complex_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string_lossy().into_owned())
}

pub fn load_complex(dir: &Path, options: &FeaturizeOptions) -> Result<Complex, DatasetError> {
    let ligand_file = resolve_single_file(dir, &options.ligand_extension)?;
    let protein_file = resolve_single_file(dir, &options.protein_extension)?;
    Ok(Complex {
        name: complex_name(dir),
        ligand: load_ligand(&ligand_file)?,
        protein: load_protein(&protein_file)?,
    })
}

pub fn featurize_complex(
    dir: &Path,
    options: &FeaturizeOptions,
) -> Result<Array2<f64>, DatasetError> {
    let complex = load_complex(dir, options)?;
    debug!(
        "{}: {} ligand atoms x {} protein atoms",
        complex.name,
        complex.ligand.get_size(),
        complex.protein.get_size()
    );
    Ok(contact_features(
        &complex.ligand,
        &complex.protein,
        &options.shells,
    ))
}

/// Immediate subdirectories of `root`, sorted by name. Other entries are ignored.
pub fn complex_dirs(root: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| DatasetError::io(root, e))? {
        let entry = entry.map_err(|e| DatasetError::io(root, e))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        } else {
            debug!("skipping non-directory entry {}", path.display());
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Featurize every complex directory under `root`.
///
/// With [`ErrorPolicy::FailFast`] the first failure (in name order) is returned as
/// [`DatasetError::Complex`]; otherwise failures are collected in the report.
pub fn featurize_dataset(
    root: &Path,
    options: &FeaturizeOptions,
) -> Result<BatchReport, DatasetError> {
    let dirs = complex_dirs(root)?;
    info!(
        "featurizing {} complexes under {} ({} shells, cutoff {})",
        dirs.len(),
        root.display(),
        options.shells.num_shells(),
        options.shells.cutoff()
    );

    let run = |dir: &PathBuf| (complex_name(dir), featurize_complex(dir, options));
    let results: Vec<(String, Result<Array2<f64>, DatasetError>)> = if options.threads == 1 {
        let mut results = Vec::with_capacity(dirs.len());
        for dir in &dirs {
            let result = run(dir);
            let failed = result.1.is_err();
            results.push(result);
            if failed && options.policy == ErrorPolicy::FailFast {
                break;
            }
        }
        results
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build()?;
        pool.install(|| dirs.par_iter().map(run).collect())
    };

    let mut report = BatchReport::default();
    for (name, result) in results {
        match result {
            Ok(features) => {
                report.features.insert(name, features);
            }
            Err(error) if options.policy == ErrorPolicy::FailFast => {
                return Err(DatasetError::Complex {
                    name,
                    source: Box::new(error),
                });
            }
            Err(error) => {
                warn!("skipping {}: {}", name, error);
                report.failures.push(ComplexFailure { name, error });
            }
        }
    }

    info!(
        "featurized {} complexes, {} skipped",
        report.features.len(),
        report.failures.len()
    );
    Ok(report)
}
