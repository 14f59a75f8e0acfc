//! ligcontact-io
//!
//! Readers for ligand structure formats not covered by `pdbtbx`.
//!
//! Only the parts of a format that feature generation consumes are read: for
//! Tripos MOL2 that is the molecule name and the `@<TRIPOS>ATOM` records.
mod mol2;

pub use self::mol2::{read_first_molecule, Mol2Atom, Mol2Error, Mol2Molecule, Molecules, Reader};
