//! # ligcontact-core
//!
//! Distance-weighted atomic contact features for protein-ligand complexes.
//!
//! __ligcontact-core__ provides:
//! * The fixed element set (`H C N O S P F Cl Br I`) whose order defines feature columns
//! * Atom-name / atom-type to element resolution for proteins and ligands
//! * [`AtomCollection`], a column-oriented view of a structure, built from `pdbtbx` or MOL2 input
//! * Distance shells ([`ShellConfig`]) and the reciprocal-distance binner
//! * [`contact_features`], the per-complex `num_shells × 100` feature matrix
//!
mod atomcollection;
mod conversions;
mod element;
mod featurize;
mod info;

#[cfg(test)]
mod test_utilities;

pub use self::atomcollection::AtomCollection;
pub use self::element::Element;
pub use self::featurize::{
    column_index, contact_features, pairwise_distances, ShellConfig, ShellError, DEFAULT_CUTOFF,
    FEATURE_COLUMNS, MAX_SHELLS, SHELL_START, SHELL_STOP, SHELL_WIDTH,
};
pub use self::info::constants::protein_atom_element;
