use thiserror::Error;

pub type Result<T, E = JacocoError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum JacocoError {
    // Can't use #[from]
    #[error("parser error: '{0}'")]
    ParserError(winnow::error::ContextError),

    #[error("io error: '{0}'")]
    IOError(#[from] std::io::Error),
}
