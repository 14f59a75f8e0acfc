//! # Constants
//!
//! Residue atom names recognised on the protein side of a complex.
//!
//! The table covers the backbone and side-chain heavy atoms of the canonical
//! amino acids, plus the PDB v2 style hydrogen names (`HB2`, `1HD1`, ...).
//! Names outside the table (e.g. `HA3`, `HD21`, metal or cofactor atoms) do not
//! resolve, and are excluded from every element column.

use crate::Element;

#[rustfmt::skip]
pub fn protein_atom_element(atom_name: &str) -> Option<Element> {
    use Element::*;
    let element = match atom_name {
        // carbon
        "C"   | "CA"  | "CB"  | "CD"  | "CD1" | "CD2" | "CE"  | "CE1" | "CE2" |
        "CE3" | "CG"  | "CG1" | "CG2" | "CH2" | "CZ"  | "CZ2" | "CZ3"          => C,
        // nitrogen
        "N"   | "ND1" | "ND2" | "NE"  | "NE1" | "NE2" | "NH1" | "NH2" | "NZ"   => N,
        // oxygen
        "O"   | "OD1" | "OD2" | "OE1" | "OE2" | "OG"  | "OG1" | "OH"  | "OXT"  => O,
        // sulfur
        "SD"  | "SG"                                                           => S,
        // hydrogen
        "H"    | "HA"   | "HA1"  | "HA2"  | "HB"   | "HB1"  | "HB2"  | "HB3"  |
        "HD1"  | "HD2"  | "HE"   | "HE1"  | "HE2"  | "HE3"  | "HG"   | "HG1"  |
        "HG2"  | "HH"   | "HH2"  | "HN1"  | "HN2"  | "HN3"  | "HZ"   | "HZ1"  |
        "HZ2"  | "HZ3"  |
        "1HD1" | "1HD2" | "1HE2" | "1HG1" | "1HG2" | "1HH1" | "1HH2" |
        "2HD1" | "2HD2" | "2HE2" | "2HG1" | "2HG2" | "2HH1" | "2HH2" |
        "3HD1" | "3HD2" | "3HG1" | "3HG2"                                      => H,
        _ => return None,
    };
    Some(element)
}
