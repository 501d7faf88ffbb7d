use thiserror::Error;

#[derive(Error, Debug)]
pub enum MugmarkError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Import input that is not a JSON array of records.
    #[error("Could not load JSON: {0}")]
    Parse(String),

    /// Export refused; carries every violation found.
    #[error("Fix these issues before export:\n\n- {}", .0.join("\n- "))]
    Validation(Vec<String>),

    #[error("No record selected")]
    NoSelection,

    #[error("Field error: {0}")]
    Field(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MugmarkError>;
