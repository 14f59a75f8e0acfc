pub mod clean;
pub mod featurize;
