use crate::info::constants::protein_atom_element;
use strum::{Display, EnumCount, EnumIter, EnumString};

/// The elements that contribute to contact features.
///
/// Declaration order is the feature-column order: `Element::iter()` yields
/// `H, C, N, O, S, P, F, Cl, Br, I`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, EnumCount,
)]
pub enum Element {
    H,
    C,
    N,
    O,
    S,
    P,
    F,
    Cl,
    Br,
    I,
}

impl Element {
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Resolve a SYBYL atom type (`C.3`, `N.ar`, `Cl`) by the text before the first `.`.
    pub fn from_ligand_type(atom_type: &str) -> Option<Self> {
        atom_type.split('.').next()?.parse().ok()
    }

    /// Resolve a PDB atom name through the residue atom-name table.
    pub fn from_protein_atom_name(atom_name: &str) -> Option<Self> {
        protein_atom_element(atom_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_column_order() {
        let symbols: Vec<String> = Element::iter().map(|e| e.to_string()).collect();
        assert_eq!(
            symbols,
            ["H", "C", "N", "O", "S", "P", "F", "Cl", "Br", "I"]
        );
        assert_eq!(Element::COUNT, 10);
        assert_eq!(Element::Cl.index(), 7);
    }

    #[test]
    fn test_ligand_types() {
        assert_eq!(Element::from_ligand_type("C.3"), Some(Element::C));
        assert_eq!(Element::from_ligand_type("N.pl3"), Some(Element::N));
        assert_eq!(Element::from_ligand_type("S.o2"), Some(Element::S));
        assert_eq!(Element::from_ligand_type("Cl"), Some(Element::Cl));
        assert_eq!(Element::from_ligand_type("Br"), Some(Element::Br));
        assert_eq!(Element::from_ligand_type("H"), Some(Element::H));
        // symbols are case sensitive, as written by SYBYL
        assert_eq!(Element::from_ligand_type("CL"), None);
        assert_eq!(Element::from_ligand_type("Du"), None);
        assert_eq!(Element::from_ligand_type("LP"), None);
        assert_eq!(Element::from_ligand_type("Na"), None);
        assert_eq!(Element::from_ligand_type(""), None);
    }
}
