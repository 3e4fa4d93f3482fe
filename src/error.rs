use crate::file::FileId;
use thiserror::Error;

pub type WebpadResult<T> = Result<T, WebpadError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebpadError {
    #[error("File name is empty")]
    EmptyName,

    #[error("A file named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Cannot delete the only remaining file")]
    LastFile,

    #[error("No file with id {id}")]
    FileNotFound { id: FileId },

    #[error("'{name}' is not an image file or its content is not a data URL")]
    NotAnImage { name: String },
}
