//! In-process data store implementing every repository port.
//!
//! Each collection lives behind its own `RwLock` and may be left
//! unprovisioned, which models a backing store that is missing or
//! unreachable. Locks are never held across an `.await`.

mod collection;

pub use collection::{Collection, UnknownCollection};

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    FlavorRepository, FlavorRepositoryError, RoomRepository, RoomRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{Flavor, FlavorName, Room, RoomName, User, UserName};

type Slot<T> = RwLock<Option<T>>;

#[derive(Debug, Default)]
struct Collections {
    flavors: Slot<BTreeMap<FlavorName, Flavor>>,
    rooms: Slot<BTreeSet<RoomName>>,
    users: Slot<BTreeSet<UserName>>,
}

/// Shared in-memory store. Clones share the same collections.
///
/// # Examples
/// ```
/// use scoops_backend::outbound::memory::{Collection, MemoryStore};
///
/// let store = MemoryStore::new();
/// assert!(store.is_provisioned(Collection::Rooms));
///
/// let partial = MemoryStore::without([Collection::Users]);
/// assert!(!partial.is_provisioned(Collection::Users));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore {
    collections: Arc<Collections>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// A store with every collection provisioned and empty.
    pub fn new() -> Self {
        Self::without([])
    }

    /// A store missing the listed collections.
    pub fn without(missing: impl IntoIterator<Item = Collection>) -> Self {
        let missing: BTreeSet<Collection> = missing.into_iter().collect();
        let provision = |collection| !missing.contains(&collection);
        Self {
            collections: Arc::new(Collections {
                flavors: RwLock::new(provision(Collection::Flavors).then(BTreeMap::new)),
                rooms: RwLock::new(provision(Collection::Rooms).then(BTreeSet::new)),
                users: RwLock::new(provision(Collection::Users).then(BTreeSet::new)),
            }),
        }
    }

    /// Whether the collection exists in this store.
    pub fn is_provisioned(&self, collection: Collection) -> bool {
        let collections = &self.collections;
        match collection {
            Collection::Flavors => is_some(&collections.flavors),
            Collection::Rooms => is_some(&collections.rooms),
            Collection::Users => is_some(&collections.users),
        }
    }
}

fn is_some<T>(slot: &Slot<T>) -> bool {
    slot.read().map(|guard| guard.is_some()).unwrap_or(false)
}

/// Lock failure surfaced through each port's `Query` variant.
struct Poisoned(Collection);

impl Poisoned {
    fn message(&self) -> String {
        format!("{} collection lock poisoned", self.0)
    }
}

fn read<T>(slot: &Slot<T>, collection: Collection) -> Result<RwLockReadGuard<'_, Option<T>>, Poisoned> {
    slot.read().map_err(|_| Poisoned(collection))
}

fn write<T>(
    slot: &Slot<T>,
    collection: Collection,
) -> Result<RwLockWriteGuard<'_, Option<T>>, Poisoned> {
    slot.write().map_err(|_| Poisoned(collection))
}

#[async_trait]
impl FlavorRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Flavor>, FlavorRepositoryError> {
        let guard = read(&self.collections.flavors, Collection::Flavors)
            .map_err(|err| FlavorRepositoryError::query(err.message()))?;
        let flavors = guard.as_ref().ok_or(FlavorRepositoryError::StoreMissing)?;
        Ok(flavors.values().cloned().collect())
    }

    async fn insert(&self, flavor: &Flavor) -> Result<(), FlavorRepositoryError> {
        let mut guard = write(&self.collections.flavors, Collection::Flavors)
            .map_err(|err| FlavorRepositoryError::query(err.message()))?;
        let flavors = guard.as_mut().ok_or(FlavorRepositoryError::StoreMissing)?;
        if flavors.contains_key(flavor.name()) {
            return Err(FlavorRepositoryError::duplicate(flavor.name().as_str()));
        }
        flavors.insert(flavor.name().clone(), flavor.clone());
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Room>, RoomRepositoryError> {
        let guard = read(&self.collections.rooms, Collection::Rooms)
            .map_err(|err| RoomRepositoryError::query(err.message()))?;
        let rooms = guard.as_ref().ok_or(RoomRepositoryError::StoreMissing)?;
        Ok(rooms.iter().cloned().map(Room::new).collect())
    }

    async fn insert(&self, name: &RoomName) -> Result<(), RoomRepositoryError> {
        let mut guard = write(&self.collections.rooms, Collection::Rooms)
            .map_err(|err| RoomRepositoryError::query(err.message()))?;
        let rooms = guard.as_mut().ok_or(RoomRepositoryError::StoreMissing)?;
        if !rooms.insert(name.clone()) {
            return Err(RoomRepositoryError::duplicate(name.as_str()));
        }
        Ok(())
    }

    async fn remove(&self, name: &RoomName) -> Result<(), RoomRepositoryError> {
        let mut guard = write(&self.collections.rooms, Collection::Rooms)
            .map_err(|err| RoomRepositoryError::query(err.message()))?;
        // A missing store reads as a missing room; there is nothing to delete.
        let rooms = guard
            .as_mut()
            .ok_or_else(|| RoomRepositoryError::not_found(name.as_str()))?;
        if !rooms.remove(name) {
            return Err(RoomRepositoryError::not_found(name.as_str()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let guard = read(&self.collections.users, Collection::Users)
            .map_err(|err| UserRepositoryError::query(err.message()))?;
        let users = guard.as_ref().ok_or(UserRepositoryError::StoreMissing)?;
        Ok(users.iter().cloned().map(User::new).collect())
    }

    async fn insert(&self, name: &UserName) -> Result<(), UserRepositoryError> {
        let mut guard = write(&self.collections.users, Collection::Users)
            .map_err(|err| UserRepositoryError::query(err.message()))?;
        let users = guard.as_mut().ok_or(UserRepositoryError::StoreMissing)?;
        if !users.insert(name.clone()) {
            return Err(UserRepositoryError::duplicate(name.as_str()));
        }
        Ok(())
    }
}
