use crate::types::TopicPathError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid topic path: {0}")]
    Path(#[from] TopicPathError),
}
