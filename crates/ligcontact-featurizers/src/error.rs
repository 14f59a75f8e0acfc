use ligcontact_core::ShellError;
use ligcontact_io::Mol2Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("no *.{extension} file in {}", .dir.display())]
    MissingFile { dir: PathBuf, extension: String },

    #[error("{} *.{extension} files in {}: {candidates:?}", .candidates.len(), .dir.display())]
    AmbiguousFile {
        dir: PathBuf,
        extension: String,
        candidates: Vec<PathBuf>,
    },

    #[error("failed to read protein {}: {}", .path.display(), .messages.join("; "))]
    Protein { path: PathBuf, messages: Vec<String> },

    #[error("failed to read ligand {}: {source}", .path.display())]
    Ligand {
        path: PathBuf,
        #[source]
        source: Mol2Error,
    },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error("pickle error: {0}")]
    Pickle(#[from] serde_pickle::Error),

    #[error("feature rows of '{name}' have unequal lengths")]
    RaggedMatrix { name: String },

    #[error("could not build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("complex '{name}' failed: {source}")]
    Complex {
        name: String,
        #[source]
        source: Box<DatasetError>,
    },
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DatasetError::Io {
            path: path.into(),
            source,
        }
    }
}
