use std::{collections::HashMap, sync::Arc};

use log::debug;
use tokio::sync::RwLock;

use crate::{
    error::{HostMapError, Result},
    store::Store,
};

pub type SharedHostMap<S> = Arc<RwLock<HostMap<S>>>;

/// Maps inbound request hosts to targets, mirroring every change into a
/// [`Store`].
///
/// Mutations are persisted first and applied in memory only once the store
/// accepts them, so a failing store never leaves the two out of sync.
pub struct HostMap<S> {
    entries: HashMap<String, String>,
    loaded: bool,
    store: S,
}

impl<S: Store> HostMap<S> {
    pub fn new(store: S) -> Self {
        Self {
            entries: HashMap::new(),
            loaded: false,
            store,
        }
    }

    pub fn shared(store: S) -> SharedHostMap<S> {
        Arc::new(RwLock::new(Self::new(store)))
    }

    /// Replaces every entry with the store's contents.
    pub fn load(&mut self) -> Result<()> {
        let entries = self.store.load()?;
        debug!("Loaded {} entries from store.", entries.len());

        self.entries = entries;
        self.loaded = true;

        Ok(())
    }

    /// Looks up the target for a request's host, port included if present.
    pub fn get(&self, host: &str) -> Result<&str> {
        self.entries
            .get(host)
            .map(String::as_str)
            .ok_or_else(|| HostMapError::NotFound(host.to_string()))
    }

    pub fn add(&mut self, host: &str, target: &str) -> Result<()> {
        if self.entries.contains_key(host) {
            return Err(HostMapError::AlreadyExists(host.to_string()));
        }

        self.store.add(host, target)?;
        self.entries.insert(host.to_string(), target.to_string());
        debug!("Added `{}` -> `{}`.", host, target);

        Ok(())
    }

    pub fn del(&mut self, host: &str) -> Result<()> {
        if !self.entries.contains_key(host) {
            return Err(HostMapError::NotFound(host.to_string()));
        }

        self.store.remove(host)?;
        self.entries.remove(host);
        debug!("Deleted `{}`.", host);

        Ok(())
    }

    pub fn modify(&mut self, host: &str, target: &str) -> Result<()> {
        if !self.entries.contains_key(host) {
            return Err(HostMapError::NotFound(host.to_string()));
        }

        self.store.modify(host, target)?;
        self.entries.insert(host.to_string(), target.to_string());
        debug!("Modified `{}` -> `{}`.", host, target);

        Ok(())
    }
}

impl<S> HostMap<S> {
    pub fn contains(&self, host: &str) -> bool {
        self.entries.contains_key(host)
    }

    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether [`HostMap::load`] has succeeded at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
