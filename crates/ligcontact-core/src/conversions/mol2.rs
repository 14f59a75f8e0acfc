use crate::{AtomCollection, Element};
use itertools::Itertools;
use ligcontact_io::Mol2Molecule;

impl From<&Mol2Molecule> for AtomCollection {
    fn from(molecule: &Mol2Molecule) -> Self {
        let (coords, atom_names, elements): (Vec<[f64; 3]>, Vec<String>, Vec<Option<Element>>) =
            molecule
                .atoms
                .iter()
                .map(|atom| {
                    (
                        atom.coords,
                        atom.name.clone(),
                        Element::from_ligand_type(&atom.atom_type),
                    )
                })
                .multiunzip();

        AtomCollection::new(coords, atom_names, elements)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AtomCollection, Element};
    use ligcontact_io::read_first_molecule;
    use ligcontact_test_data::TestFile;

    #[test]
    fn test_mol2_from() {
        let (lig_file, _temp) = TestFile::ligand_01().create_temp().unwrap();
        let molecule = read_first_molecule(lig_file).unwrap();
        let ac = AtomCollection::from(&molecule);

        // only the first molecule; the dummy atom stays unresolved
        assert_eq!(ac.get_size(), 8);
        assert_eq!(ac.unresolved_atom_names(), vec!["DU1"]);
        assert_eq!(ac.get_element(4), Some(Element::Cl));
        assert_eq!(ac.element_coords(Element::C).nrows(), 2);
        assert_eq!(
            ac.element_coords(Element::Cl).row(0).to_vec(),
            vec![2.4, 1.5, -0.6]
        );
    }
}
