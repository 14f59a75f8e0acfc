use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

const TRIPOS_TAG: &str = "@<TRIPOS>";

#[derive(Debug, Error)]
pub enum Mol2Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no @<TRIPOS>MOLECULE record found")]
    NoMolecule,

    #[error("molecule '{0}' has no @<TRIPOS>ATOM section")]
    MissingAtomSection(String),

    #[error("malformed atom record on line {line}: {reason}")]
    MalformedAtomLine { line: usize, reason: String },
}

/// One row of the `@<TRIPOS>ATOM` section.
#[derive(Debug, Clone, PartialEq)]
pub struct Mol2Atom {
    pub atom_id: usize,
    pub name: String,
    pub coords: [f64; 3],
    /// SYBYL atom type, e.g. `C.ar` or `Cl`.
    pub atom_type: String,
    pub subst_name: Option<String>,
    pub charge: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mol2Molecule {
    pub name: String,
    pub atoms: Vec<Mol2Atom>,
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Molecule,
    Atom,
    Other,
}

/// A MOL2 reader.
pub struct Reader<R> {
    inner: R,
    line_number: usize,
    // header of the next molecule, consumed while finishing the previous one
    pending: Option<String>,
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Creates a MOL2 reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line_number: 0,
            pending: None,
        }
    }

    /// Reads the next molecule. Returns `Ok(None)` once the stream holds no
    /// further `@<TRIPOS>MOLECULE` records.
    pub fn read_molecule(&mut self) -> Result<Option<Mol2Molecule>, Mol2Error> {
        loop {
            match self.next_line()? {
                None => return Ok(None),
                Some(line) if section_name(&line) == Some("MOLECULE") => break,
                Some(_) => {}
            }
        }

        let mut name: Option<String> = None;
        let mut atoms = Vec::new();
        let mut seen_atom_section = false;
        let mut section = Section::Molecule;

        while let Some(line) = self.next_line()? {
            if let Some(tag) = section_name(&line) {
                if tag == "MOLECULE" {
                    self.pending = Some(line);
                    break;
                }
                section = if tag == "ATOM" {
                    seen_atom_section = true;
                    Section::Atom
                } else {
                    Section::Other
                };
                continue;
            }
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                continue;
            }
            match section {
                Section::Molecule => {
                    // the first line after the header is the molecule name
                    if name.is_none() {
                        name = Some(trimmed.to_string());
                    }
                }
                Section::Atom if !trimmed.is_empty() => {
                    atoms.push(parse_atom_line(trimmed, self.line_number)?);
                }
                _ => {}
            }
        }

        let name = name.unwrap_or_default();
        if !seen_atom_section {
            return Err(Mol2Error::MissingAtomSection(name));
        }
        Ok(Some(Mol2Molecule { name, atoms }))
    }

    /// Returns an iterator over molecules starting from the current stream position.
    pub fn molecules(&mut self) -> Molecules<'_, R> {
        Molecules { reader: self }
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        let len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(len);
        Ok(Some(buf))
    }
}

/// Iterator over the molecules of a MOL2 stream.
pub struct Molecules<'r, R> {
    reader: &'r mut Reader<R>,
}

impl<R: BufRead> Iterator for Molecules<'_, R> {
    type Item = Result<Mol2Molecule, Mol2Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_molecule().transpose()
    }
}

/// Opens `path` and returns its first molecule. Multi-molecule files are
/// common for docking poses; only the leading pose is used.
pub fn read_first_molecule(path: impl AsRef<Path>) -> Result<Mol2Molecule, Mol2Error> {
    let file = File::open(path)?;
    Reader::new(BufReader::new(file))
        .read_molecule()?
        .ok_or(Mol2Error::NoMolecule)
}

fn section_name(line: &str) -> Option<&str> {
    line.trim().strip_prefix(TRIPOS_TAG)
}

// atom_id atom_name x y z atom_type [subst_id [subst_name [charge [status_bit]]]]
fn parse_atom_line(line: &str, line_number: usize) -> Result<Mol2Atom, Mol2Error> {
    let malformed = |reason: String| Mol2Error::MalformedAtomLine {
        line: line_number,
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 6 {
        return Err(malformed(format!(
            "expected at least 6 fields, found {}",
            fields.len()
        )));
    }

    let atom_id = fields[0]
        .parse::<usize>()
        .map_err(|e| malformed(format!("atom id '{}': {}", fields[0], e)))?;

    let mut coords = [0f64; 3];
    for (axis, field) in coords.iter_mut().zip(&fields[2..5]) {
        *axis = field
            .parse::<f64>()
            .map_err(|e| malformed(format!("coordinate '{}': {}", field, e)))?;
    }

    Ok(Mol2Atom {
        atom_id,
        name: fields[1].to_string(),
        coords,
        atom_type: fields[5].to_string(),
        subst_name: fields.get(7).map(|s| s.to_string()),
        charge: fields.get(8).and_then(|s| s.parse().ok()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ligcontact_test_data::TestFile;

    const BENZENE_FRAGMENT: &str = "\
# written by hand
@<TRIPOS>MOLECULE
frag
 3 2 1 0 0
SMALL
NO_CHARGES

@<TRIPOS>ATOM
      1 C1          1.3970    0.0000    0.0000 C.ar      1  BNZ1        0.0000
      2 C2          0.6985    1.2098    0.0000 C.ar      1  BNZ1        0.0000
      3 H1          2.4810    0.0000    0.0000 H         1  BNZ1
@<TRIPOS>BOND
     1     1     2   ar
";

    #[test]
    fn test_basic_read() {
        let mut reader = Reader::new(BENZENE_FRAGMENT.as_bytes());
        let mol = reader.read_molecule().unwrap().unwrap();
        assert_eq!(mol.name, "frag");
        assert_eq!(mol.atoms.len(), 3);
        assert_eq!(mol.atoms[1].coords, [0.6985, 1.2098, 0.0]);
        assert_eq!(mol.atoms[0].atom_type, "C.ar");
        assert_eq!(mol.atoms[0].subst_name.as_deref(), Some("BNZ1"));
        assert_eq!(mol.atoms[2].charge, None);
        assert!(reader.read_molecule().unwrap().is_none());
    }

    #[test]
    fn test_multiple_molecules() {
        let (lig_file, _temp) = TestFile::ligand_01().create_temp().unwrap();
        let file = File::open(&lig_file).unwrap();
        let mut reader = Reader::new(BufReader::new(file));
        let molecules: Vec<Mol2Molecule> = reader.molecules().map(|m| m.unwrap()).collect();
        assert_eq!(molecules.len(), 2);
        assert_eq!(molecules[0].name, "1abc_ligand");
        assert_eq!(molecules[0].atoms.len(), 8);
        assert_eq!(molecules[1].name, "decoy");
        assert_eq!(molecules[1].atoms.len(), 1);

        let first = read_first_molecule(&lig_file).unwrap();
        assert_eq!(first, molecules[0]);
        assert_eq!(first.atoms[4].atom_type, "Cl");
        assert_eq!(first.atoms[7].atom_type, "Du");
    }

    #[test]
    fn test_missing_atom_section() {
        let input = "@<TRIPOS>MOLECULE\nempty\n 0 0 0\n@<TRIPOS>BOND\n";
        let err = Reader::new(input.as_bytes()).read_molecule().unwrap_err();
        assert!(matches!(err, Mol2Error::MissingAtomSection(ref name) if name == "empty"));
    }

    #[test]
    fn test_malformed_coordinate() {
        let input = "@<TRIPOS>MOLECULE\nbad\n\n@<TRIPOS>ATOM\n 1 C1 0.0 abc 0.0 C.3\n";
        match Reader::new(input.as_bytes()).read_molecule() {
            Err(Mol2Error::MalformedAtomLine { line, .. }) => assert_eq!(line, 5),
            other => panic!("expected malformed atom line, got {:?}", other),
        }
    }

    #[test]
    fn test_no_molecule() {
        let (prot_file, _temp) = TestFile::protein_02().create_temp().unwrap();
        assert!(matches!(
            read_first_molecule(prot_file),
            Err(Mol2Error::NoMolecule)
        ));
    }
}
