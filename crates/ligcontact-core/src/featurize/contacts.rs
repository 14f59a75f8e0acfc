use super::ShellConfig;
use crate::{AtomCollection, Element};
use itertools::iproduct;
use ndarray::Array2;
use strum::{EnumCount, IntoEnumIterator};

/// Number of feature columns: one per (ligand element, protein element) pair.
pub const FEATURE_COLUMNS: usize = Element::COUNT * Element::COUNT;

/// Column of the (ligand, protein) element pair: ligand-major over [`Element`] order.
pub fn column_index(ligand: Element, protein: Element) -> usize {
    ligand.index() * Element::COUNT + protein.index()
}

/// Build the `num_shells × FEATURE_COLUMNS` contact matrix of one complex.
///
/// Cell `(k, column_index(l, p))` is the sum of `1/d` over every ligand atom of
/// element `l` and protein atom of element `p` whose distance `d` falls in shell `k`.
/// Atoms without a resolved element contribute nowhere.
pub fn contact_features(
    ligand: &AtomCollection,
    protein: &AtomCollection,
    shells: &ShellConfig,
) -> Array2<f64> {
    let ligand_sets = ligand.element_coord_sets();
    let protein_sets = protein.element_coord_sets();

    let mut features = Array2::<f64>::zeros((shells.num_shells(), FEATURE_COLUMNS));
    for (ligand_element, protein_element) in iproduct!(Element::iter(), Element::iter()) {
        let ligand_coords = &ligand_sets[ligand_element.index()];
        let protein_coords = &protein_sets[protein_element.index()];
        if ligand_coords.is_empty() || protein_coords.is_empty() {
            continue;
        }
        let sums = shells.bin_pair(ligand_coords.view(), protein_coords.view());
        features
            .column_mut(column_index(ligand_element, protein_element))
            .assign(&sums);
    }
    features
}
