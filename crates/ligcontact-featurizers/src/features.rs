use crate::DatasetError;
use ndarray::{Array2, ArrayView2};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_pickle::{DeOptions, SerOptions};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Feature matrices keyed by complex name.
///
/// Pickled as `dict[str, list[list[float]]]`: one inner list per shell, so
/// `numpy.array(features[name])` restores the `num_shells × 100` matrix. Floats are
/// written as 8-byte doubles and survive the round trip bit for bit.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeatureSet {
    entries: BTreeMap<String, Array2<f64>>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn insert(&mut self, name: impl Into<String>, features: Array2<f64>) -> Option<Array2<f64>> {
        self.entries.insert(name.into(), features)
    }
    pub fn get(&self, name: &str) -> Option<&Array2<f64>> {
        self.entries.get(name)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn to_writer<W: Write>(&self, writer: &mut W) -> Result<(), DatasetError> {
        serde_pickle::to_writer(writer, self, SerOptions::new())?;
        Ok(())
    }

    pub fn write_pickle(&self, path: impl AsRef<Path>) -> Result<(), DatasetError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| DatasetError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(|e| DatasetError::io(path, e))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let raw: BTreeMap<String, Vec<Vec<f64>>> =
            serde_pickle::from_reader(reader, DeOptions::new())?;

        let mut features = FeatureSet::new();
        for (name, rows) in raw {
            let nrows = rows.len();
            let ncols = rows.first().map_or(0, Vec::len);
            if rows.iter().any(|row| row.len() != ncols) {
                return Err(DatasetError::RaggedMatrix { name });
            }
            let flat: Vec<f64> = rows.into_iter().flatten().collect();
            let matrix = Array2::from_shape_vec((nrows, ncols), flat)
                .map_err(|_| DatasetError::RaggedMatrix { name: name.clone() })?;
            features.insert(name, matrix);
        }
        Ok(features)
    }

    pub fn read_pickle(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;
        Self::from_reader(BufReader::new(file))
    }
}

struct Rows<'a>(ArrayView2<'a, f64>);

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.rows().into_iter().map(|row| row.to_vec()))
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, matrix) in &self.entries {
            map.serialize_entry(name, &Rows(matrix.view()))?;
        }
        map.end()
    }
}
