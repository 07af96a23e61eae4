//! City lifecycle: startup initialization from the configured name list and
//! basic lookups.

pub mod error;

use crate::store::CityStore;
use crate::types::city::City;
use error::CityError;
use log::{info, warn};
use std::sync::Arc;

/// Manages the fixed set of known cities.
///
/// Cities are created once at process start from the configured name list and
/// never deleted afterwards; everything else is lookups.
pub struct CityService<S> {
    store: Arc<S>,
}

impl<S: CityStore> CityService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates one city per configured name, in order.
    ///
    /// Initialization is idempotent: a name that already resolves to a stored
    /// city is skipped with a warning instead of failing the batch, so the
    /// sequence can be re-run against a warm store. Returns the number of
    /// cities actually created.
    pub fn initialize(&self, names: &[String]) -> Result<usize, CityError> {
        info!("Initializing cities.");

        let mut created = 0;
        for name in names {
            if self.store.find_city_by_name(name)?.is_some() {
                warn!("City '{}' already initialized, skipping.", name);
                continue;
            }
            self.create(City::new(name.clone()))?;
            created += 1;
        }

        info!("Finished initializing cities ({} created).", created);
        Ok(created)
    }

    /// Persists a new city and returns it with its assigned id.
    ///
    /// A city carrying an id that already resolves in the store is rejected
    /// with [`CityError::AlreadyExists`] without touching stored state.
    pub fn create(&self, city: City) -> Result<City, CityError> {
        if let Some(id) = city.id() {
            if self.store.city_exists(id)? {
                return Err(CityError::AlreadyExists(id));
            }
        }
        Ok(self.store.save_city(city)?)
    }

    /// All known cities, order unspecified.
    pub fn get_all(&self) -> Result<Vec<City>, CityError> {
        Ok(self.store.find_cities()?)
    }

    pub fn get_by_id(&self, id: u64) -> Result<City, CityError> {
        self.store.find_city(id)?.ok_or(CityError::NotFound(id))
    }
}
