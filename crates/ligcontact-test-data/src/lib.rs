//! ligcontact-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//!
//! Single structure files are represented as `TestFile` objects which package the raw
//! binary data and create temporary files for programs to operate on. Whole complexes
//! (one ligand and one protein file in a named directory) are represented as `TestComplex`
//! and are materialised inside a temporary dataset root.
use std::fs;
use std::path::Path;
use tempfile::{Builder, NamedTempFile, TempDir};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use ligcontact_test_data::TestFile;
/// let (prot_file, _temp) = TestFile::protein_01().create_temp().unwrap();
/// let (lig_file, _temp) = TestFile::ligand_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Gly-Cys dipeptide with a trailing water HETATM and one `HA3` hydrogen
    /// that is absent from the atom-name table.
    pub fn protein_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/complexes/1abc/1abc_protein.pdb"),
            suffix: "pdb",
        }
    }
    /// Single alanine fragment: carbons and one hydrogen.
    pub fn protein_02() -> Self {
        Self {
            filebinary: include_bytes!("../data/complexes/2xyz/2xyz_protein.pdb"),
            suffix: "pdb",
        }
    }
    /// The `protein_02` atoms behind SYBYL-style `HEADER`, `COMPND` and free-text
    /// `REMARK` records.
    pub fn protein_03() -> Self {
        Self {
            filebinary: include_bytes!("../data/complexes/10gs/10gs_protein.pdb"),
            suffix: "pdb",
        }
    }
    /// Eight atom ligand with a dummy (`Du`) atom, followed by a second
    /// single-atom molecule in the same file.
    pub fn ligand_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/complexes/1abc/1abc_ligand.mol2"),
            suffix: "mol2",
        }
    }
    /// Two atom ligand: one carbon and one hydrogen.
    pub fn ligand_02() -> Self {
        Self {
            filebinary: include_bytes!("../data/complexes/2xyz/2xyz_ligand.mol2"),
            suffix: "mol2",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}

#[derive(Debug)]
/// Test Complex
///
/// ```ignore
/// use ligcontact_test_data::TestComplex;
/// let root = TestComplex::dataset_root().unwrap();
/// TestComplex::complex_01().write_into(root.path()).unwrap();
/// ```
pub struct TestComplex {
    name: &'static str,
    ligand: TestFile,
    protein: TestFile,
}

impl TestComplex {
    pub fn complex_01() -> Self {
        Self {
            name: "1abc",
            ligand: TestFile::ligand_01(),
            protein: TestFile::protein_01(),
        }
    }
    pub fn complex_02() -> Self {
        Self {
            name: "2xyz",
            ligand: TestFile::ligand_02(),
            protein: TestFile::protein_02(),
        }
    }
    /// Same atoms as `complex_02`; only the protein's header records differ.
    pub fn complex_03() -> Self {
        Self {
            name: "10gs",
            ligand: TestFile::ligand_02(),
            protein: TestFile::protein_03(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// An empty temporary directory to act as a dataset root.
    pub fn dataset_root() -> std::io::Result<TempDir> {
        Builder::new().prefix("ligcontact-").tempdir()
    }

    /// Writes `<root>/<name>/<name>_ligand.mol2` and `<root>/<name>/<name>_protein.pdb`
    /// and returns the complex directory.
    pub fn write_into(&self, root: &Path) -> std::io::Result<std::path::PathBuf> {
        let dir = root.join(self.name);
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join(format!("{}_ligand.{}", self.name, self.ligand.suffix)),
            self.ligand.filebinary,
        )?;
        fs::write(
            dir.join(format!("{}_protein.{}", self.name, self.protein.suffix)),
            self.protein.filebinary,
        )?;
        Ok(dir)
    }
}
