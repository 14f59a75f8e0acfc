use crate::{AtomCollection, Element};

pub(crate) fn collection(atoms: &[([f64; 3], &str, Option<Element>)]) -> AtomCollection {
    AtomCollection::new(
        atoms.iter().map(|(c, _, _)| *c).collect(),
        atoms.iter().map(|(_, n, _)| n.to_string()).collect(),
        atoms.iter().map(|(_, _, e)| *e).collect(),
    )
}

/// Collection where every atom resolves to `element`.
pub(crate) fn single_element(element: Element, coords: &[[f64; 3]]) -> AtomCollection {
    AtomCollection::new(
        coords.to_vec(),
        coords.iter().map(|_| element.to_string()).collect(),
        coords.iter().map(|_| Some(element)).collect(),
    )
}
