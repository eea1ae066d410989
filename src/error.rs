use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyselError {
    #[error("Failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
