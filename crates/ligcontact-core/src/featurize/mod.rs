//! Contact featurizer
//!
//! Turns a ligand and a protein [`AtomCollection`](crate::AtomCollection) into a
//! distance-weighted contact matrix:
//!
//! - every ligand/protein atom pair of a given element pair yields one distance
//! - distances are grouped into half-open shells `[lower, lower + 0.5)`
//! - each shell holds the sum of reciprocal distances that fall in it
mod contacts;
mod distances;
mod shells;

pub use self::contacts::{column_index, contact_features, FEATURE_COLUMNS};
pub use self::distances::pairwise_distances;
pub use self::shells::{
    ShellConfig, ShellError, DEFAULT_CUTOFF, MAX_SHELLS, SHELL_START, SHELL_STOP, SHELL_WIDTH,
};
