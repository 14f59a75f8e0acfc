//! ligcontact-featurizers
//!
//! - dataset layer: one directory per complex, one ligand and one protein file in each
//! - batch featurization into a [`FeatureSet`], written as a single pickle
//! - cleanup of auxiliary structure files left in a dataset tree
//! - the `ligcontact` CLI wrapping the above
//!
mod cleanup;
mod dataset;
mod error;
mod features;

pub use cleanup::{delete_excessive_files, CleanupReport};
pub use dataset::{
    complex_dirs, featurize_complex, featurize_dataset, load_complex, load_ligand, load_protein,
    resolve_single_file, BatchReport, Complex, ComplexFailure, ErrorPolicy, FeaturizeOptions,
};
pub use error::DatasetError;
pub use features::FeatureSet;
