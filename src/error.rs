use thiserror::Error;

pub type EmployeeResult<T> = Result<T, EmployeeError>;

#[derive(Error, Debug)]
pub enum EmployeeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File error: {0}")]
    File(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing column: '{0}'")]
    MissingColumn(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
