use crate::{AtomCollection, Element};
use itertools::Itertools;
use pdbtbx::PDB;

impl From<&PDB> for AtomCollection {
    // the PDB API requires us to iterate:
    // PDB --> Chain --> Residue --> Atom if we want data from all.
    // Only ATOM records are kept; HETATM (waters, ions, bound ligands) are dropped.
    // Elements come from the residue atom-name table, not from the element column.
    fn from(pdb_data: &PDB) -> Self {
        let (coords, atom_names, elements): (Vec<[f64; 3]>, Vec<String>, Vec<Option<Element>>) =
            pdb_data
                .chains()
                .flat_map(|chain| chain.residues())
                .flat_map(|residue| residue.atoms())
                .filter(|atom| !atom.hetero())
                .map(|atom| {
                    let (x, y, z) = atom.pos();
                    (
                        [x, y, z],
                        atom.name().to_string(),
                        Element::from_protein_atom_name(atom.name()),
                    )
                })
                .multiunzip();

        AtomCollection::new(coords, atom_names, elements)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AtomCollection, Element};
    use ligcontact_test_data::TestFile;

    #[test]
    fn test_pdb_from() {
        let (prot_file, _temp) = TestFile::protein_01().create_temp().unwrap();
        let (pdb, _errors) = pdbtbx::open(prot_file).unwrap();
        assert_eq!(pdb.atom_count(), 16);

        // the water HETATM is not part of the protein
        let ac = AtomCollection::from(&pdb);
        assert_eq!(ac.get_size(), 15);
        assert_eq!(ac.get_atom_name(1), "CA");
        assert_eq!(ac.get_coord(1), &[4.2, 1.1, 0.3]);

        // HA3 is not in the atom-name table
        assert_eq!(ac.unresolved_atom_names(), vec!["HA3"]);
        assert_eq!(ac.element_coords(Element::C).nrows(), 5);
        assert_eq!(ac.element_coords(Element::O).nrows(), 3);
        assert_eq!(ac.element_coords(Element::S).nrows(), 1);
        assert_eq!(ac.element_coords(Element::H).nrows(), 3);
        assert_eq!(ac.element_coords(Element::Cl).nrows(), 0);
    }
}
