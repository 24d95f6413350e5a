//! The pets data provider: a URI-addressed CRUD surface over the SQLite store
//! plus change notifications for anything that keeps a live query open.
//!
//! Clients talk to the [`PetProvider`] trait rather than to the database so
//! the catalog and loader can run against a different store in tests.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use thiserror::Error;

use crate::contract::PetUri;
use crate::db::{
    delete_all_pets, delete_pet, fetch_pet, fetch_pet_summaries, fetch_pets, insert_pet,
    open_database, open_in_memory, update_pets,
};
use crate::models::{Gender, Pet, PetSummary, PetValues};

/// Failures reported by a [`PetProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The operation is not defined for this URI (e.g. inserting into a row).
    #[error("{operation} is not supported for {uri}")]
    UnsupportedUri { operation: &'static str, uri: PetUri },
    /// The values failed the provider's sanity checks.
    #[error("{0}")]
    Validation(String),
    /// The underlying SQLite call failed.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
    /// A thread panicked while holding the provider's lock.
    #[error("provider lock poisoned")]
    Poisoned,
}

/// Receives a callback whenever provider content changes.
pub trait ContentObserver: Send {
    /// Called with the URI whose content changed. Returning `false` tells the
    /// provider the observer is gone and can be dropped.
    fn on_change(&self, uri: PetUri) -> bool;
}

/// CRUD surface of the pets store, addressed through [`PetUri`]s.
pub trait PetProvider: Send + Sync {
    /// The catalog projection (id, name, breed) of every pet, default order.
    fn query_catalog(&self) -> Result<Vec<PetSummary>, ProviderError>;

    /// Full records for the collection or a single item. An unknown item id
    /// yields an empty vector.
    fn query(&self, uri: PetUri) -> Result<Vec<Pet>, ProviderError>;

    /// Insert into the collection and return the new row's URI.
    fn insert(&self, uri: PetUri, values: &PetValues) -> Result<PetUri, ProviderError>;

    /// Update the present columns; returns the number of rows changed.
    fn update(&self, uri: PetUri, values: &PetValues) -> Result<usize, ProviderError>;

    /// Delete one row or, for the collection URI, every row.
    fn delete(&self, uri: PetUri) -> Result<usize, ProviderError>;

    fn register_observer(&self, observer: Box<dyn ContentObserver>);
}

/// [`PetProvider`] backed by a SQLite connection.
pub struct SqlitePetProvider {
    conn: Mutex<Connection>,
    observers: Mutex<Vec<Box<dyn ContentObserver>>>,
}

impl SqlitePetProvider {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Open the on-disk store at `path`, creating it when missing.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(open_database(path)?))
    }

    pub fn in_memory() -> anyhow::Result<Self> {
        Ok(Self::new(open_in_memory()?))
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, ProviderError> {
        self.conn.lock().map_err(|_| ProviderError::Poisoned)
    }

    fn notify_change(&self, uri: PetUri) {
        match self.observers.lock() {
            Ok(mut observers) => observers.retain(|observer| observer.on_change(uri)),
            Err(_) => log::error!("observer list poisoned, dropping change notification"),
        }
    }
}

impl PetProvider for SqlitePetProvider {
    fn query_catalog(&self) -> Result<Vec<PetSummary>, ProviderError> {
        let conn = self.connection()?;
        Ok(fetch_pet_summaries(&conn)?)
    }

    fn query(&self, uri: PetUri) -> Result<Vec<Pet>, ProviderError> {
        let conn = self.connection()?;
        match uri {
            PetUri::Collection => Ok(fetch_pets(&conn)?),
            PetUri::Item(id) => Ok(fetch_pet(&conn, id)?.into_iter().collect()),
        }
    }

    fn insert(&self, uri: PetUri, values: &PetValues) -> Result<PetUri, ProviderError> {
        if uri != PetUri::Collection {
            return Err(ProviderError::UnsupportedUri {
                operation: "insert",
                uri,
            });
        }

        let (name, breed, gender, weight) = validate_insert(values)?;
        let id = {
            let conn = self.connection()?;
            insert_pet(&conn, &name, &breed, gender, weight)?
        };

        let new_uri = PetUri::with_appended_id(id);
        log::info!("inserted pet {new_uri}");
        self.notify_change(uri);
        Ok(new_uri)
    }

    fn update(&self, uri: PetUri, values: &PetValues) -> Result<usize, ProviderError> {
        validate_update(values)?;
        if values.is_empty() {
            return Ok(0);
        }

        let updated = {
            let conn = self.connection()?;
            update_pets(&conn, uri.id(), values)?
        };

        log::info!("updated {updated} row(s) at {uri}");
        if updated > 0 {
            self.notify_change(uri);
        }
        Ok(updated)
    }

    fn delete(&self, uri: PetUri) -> Result<usize, ProviderError> {
        let deleted = {
            let conn = self.connection()?;
            match uri {
                PetUri::Collection => delete_all_pets(&conn)?,
                PetUri::Item(id) => delete_pet(&conn, id)?,
            }
        };

        log::info!("deleted {deleted} row(s) at {uri}");
        if deleted > 0 {
            self.notify_change(uri);
        }
        Ok(deleted)
    }

    fn register_observer(&self, observer: Box<dyn ContentObserver>) {
        match self.observers.lock() {
            Ok(mut observers) => observers.push(observer),
            Err(_) => log::error!("observer list poisoned, observer not registered"),
        }
    }
}

/// Check insert values and fill defaults for absent columns.
fn validate_insert(values: &PetValues) -> Result<(String, String, Gender, i64), ProviderError> {
    let name = values
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ProviderError::Validation("Pet requires a name".into()))?;

    let weight = values.weight.unwrap_or(0);
    if weight < 0 {
        return Err(ProviderError::Validation("Pet requires valid weight".into()));
    }

    Ok((
        name.to_string(),
        values.breed.clone().unwrap_or_default(),
        values.gender.unwrap_or_default(),
        weight,
    ))
}

/// Check only the columns an update actually carries.
fn validate_update(values: &PetValues) -> Result<(), ProviderError> {
    if let Some(name) = &values.name {
        if name.trim().is_empty() {
            return Err(ProviderError::Validation("Pet requires a name".into()));
        }
    }
    if matches!(values.weight, Some(weight) if weight < 0) {
        return Err(ProviderError::Validation("Pet requires valid weight".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{channel, Sender};

    use super::*;

    struct ChannelObserver(Sender<PetUri>);

    impl ContentObserver for ChannelObserver {
        fn on_change(&self, uri: PetUri) -> bool {
            self.0.send(uri).is_ok()
        }
    }

    fn toto() -> PetValues {
        PetValues {
            name: Some("Toto".into()),
            breed: Some("Terrier".into()),
            gender: Some(Gender::Male),
            weight: Some(7),
        }
    }

    #[test]
    fn insert_returns_item_uri_and_fills_defaults() {
        let provider = SqlitePetProvider::in_memory().unwrap();
        let uri = provider
            .insert(
                PetUri::Collection,
                &PetValues {
                    name: Some("Rex".into()),
                    ..PetValues::default()
                },
            )
            .unwrap();

        let pets = provider.query(uri).unwrap();
        assert_eq!(pets.len(), 1);
        assert_eq!(pets[0].breed, "");
        assert_eq!(pets[0].gender, Gender::Unknown);
        assert_eq!(pets[0].weight, 0);
        assert_eq!(uri, PetUri::Item(pets[0].id));
    }

    #[test]
    fn insert_rejects_missing_name_and_negative_weight() {
        let provider = SqlitePetProvider::in_memory().unwrap();

        let nameless = PetValues {
            name: Some("   ".into()),
            ..toto()
        };
        assert!(matches!(
            provider.insert(PetUri::Collection, &nameless),
            Err(ProviderError::Validation(_))
        ));

        let negative = PetValues {
            weight: Some(-2),
            ..toto()
        };
        assert!(matches!(
            provider.insert(PetUri::Collection, &negative),
            Err(ProviderError::Validation(_))
        ));

        assert!(provider.query_catalog().unwrap().is_empty());
    }

    #[test]
    fn insert_into_item_uri_is_unsupported() {
        let provider = SqlitePetProvider::in_memory().unwrap();
        let result = provider.insert(PetUri::Item(1), &toto());
        assert!(matches!(
            result,
            Err(ProviderError::UnsupportedUri { operation: "insert", .. })
        ));
    }

    #[test]
    fn update_validates_present_columns_only() {
        let provider = SqlitePetProvider::in_memory().unwrap();
        let uri = provider.insert(PetUri::Collection, &toto()).unwrap();

        let rename = PetValues {
            name: Some("Dorothy".into()),
            ..PetValues::default()
        };
        assert_eq!(provider.update(uri, &rename).unwrap(), 1);
        assert_eq!(provider.query(uri).unwrap()[0].name, "Dorothy");
        assert_eq!(provider.query(uri).unwrap()[0].weight, 7);

        let blank = PetValues {
            name: Some(String::new()),
            ..PetValues::default()
        };
        assert!(provider.update(uri, &blank).is_err());
        assert_eq!(provider.update(uri, &PetValues::default()).unwrap(), 0);
    }

    #[test]
    fn delete_collection_removes_every_row() {
        let provider = SqlitePetProvider::in_memory().unwrap();
        provider.insert(PetUri::Collection, &toto()).unwrap();
        provider.insert(PetUri::Collection, &toto()).unwrap();

        assert_eq!(provider.delete(PetUri::Collection).unwrap(), 2);
        assert!(provider.query_catalog().unwrap().is_empty());
        assert_eq!(provider.delete(PetUri::Collection).unwrap(), 0);
    }

    #[test]
    fn observers_hear_about_effective_changes_only() {
        let provider = SqlitePetProvider::in_memory().unwrap();
        let (tx, rx) = channel();
        provider.register_observer(Box::new(ChannelObserver(tx)));

        let uri = provider.insert(PetUri::Collection, &toto()).unwrap();
        assert_eq!(rx.try_recv(), Ok(PetUri::Collection));

        assert_eq!(provider.delete(PetUri::Item(uri.id().unwrap() + 1)).unwrap(), 0);
        assert!(rx.try_recv().is_err());

        provider.delete(uri).unwrap();
        assert_eq!(rx.try_recv(), Ok(uri));
    }

    #[test]
    fn detached_observers_are_dropped() {
        let provider = SqlitePetProvider::in_memory().unwrap();
        let (tx, rx) = channel();
        provider.register_observer(Box::new(ChannelObserver(tx)));
        drop(rx);

        provider.insert(PetUri::Collection, &toto()).unwrap();
        assert!(provider.observers.lock().unwrap().is_empty());
    }
}
