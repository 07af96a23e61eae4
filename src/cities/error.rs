use crate::store::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CityError {
    #[error("No city with id {0}")]
    NotFound(u64),

    #[error("City with id {0} already exists")]
    AlreadyExists(u64),

    #[error(transparent)]
    Store(#[from] StoreError),
}
