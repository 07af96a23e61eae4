use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No city with id {0} in the store")]
    CityNotFound(u64),

    #[error("Entity with id {0} already exists in the store")]
    AlreadyExists(u64),

    #[error("Operation requires an entity with a store-assigned id")]
    MissingId,

    #[error("Store lock poisoned by a panicked writer")]
    Poisoned,
}
