use crate::Element;
use itertools::{izip, Itertools};
use ndarray::Array2;
use strum::IntoEnumIterator;

/// Column-oriented atoms of one structure (a protein or a ligand).
///
/// Each atom carries its coordinates, its raw name and the element it resolved to.
/// `None` marks an atom whose name or type maps to none of the ten feature elements.
pub struct AtomCollection {
    size: usize,
    coords: Vec<[f64; 3]>,
    atom_names: Vec<String>,
    elements: Vec<Option<Element>>,
}

impl AtomCollection {
    pub fn new(
        coords: Vec<[f64; 3]>,
        atom_names: Vec<String>,
        elements: Vec<Option<Element>>,
    ) -> Self {
        assert_eq!(coords.len(), atom_names.len());
        assert_eq!(coords.len(), elements.len());
        AtomCollection {
            size: coords.len(),
            coords,
            atom_names,
            elements,
        }
    }
    pub fn get_size(&self) -> usize {
        self.size
    }
    pub fn get_atom_name(&self, idx: usize) -> &String {
        &self.atom_names[idx]
    }
    pub fn get_coord(&self, idx: usize) -> &[f64; 3] {
        &self.coords[idx]
    }
    pub fn get_element(&self, idx: usize) -> Option<Element> {
        self.elements[idx]
    }
    pub fn iter_coords_and_elements(&self) -> impl Iterator<Item = (&[f64; 3], &Option<Element>)> {
        izip!(&self.coords, &self.elements)
    }
    /// Coordinates of every atom of `element`, in file order, as an `N × 3` array.
    /// `N` may be zero.
    pub fn element_coords(&self, element: Element) -> Array2<f64> {
        let rows: Vec<[f64; 3]> = self
            .iter_coords_and_elements()
            .filter(|(_, e)| **e == Some(element))
            .map(|(c, _)| *c)
            .collect();
        Array2::from(rows)
    }
    /// `element_coords` for each element, indexed by [`Element::index`].
    pub fn element_coord_sets(&self) -> Vec<Array2<f64>> {
        Element::iter().map(|e| self.element_coords(e)).collect()
    }
    pub fn unresolved_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_none()).count()
    }
    /// Distinct names of atoms without an element, sorted.
    pub fn unresolved_atom_names(&self) -> Vec<&str> {
        izip!(&self.atom_names, &self.elements)
            .filter(|(_, e)| e.is_none())
            .map(|(name, _)| name.as_str())
            .unique()
            .sorted()
            .collect()
    }
}
