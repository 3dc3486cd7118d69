use std::{
    collections::{hash_map::Entry, HashMap},
    str::FromStr,
};

use anyhow::{anyhow, bail, Error, Result};

use crate::{constants::ENTRY_SEPARATOR, store::Store};

/// A [`Store`] that keeps its records in a plain map.
///
/// Behaves like a table with a unique host column: inserting a present host,
/// or updating/deleting a missing one, is rejected.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &HashMap<String, String> {
        &self.records
    }

    fn parse_entry(entry: &str) -> Result<(String, String)> {
        let (host, target) = entry
            .split_once(ENTRY_SEPARATOR)
            .ok_or(anyhow!("Missing `{}` in entry `{}`.", ENTRY_SEPARATOR, entry))?;
        let (host, target) = (host.trim(), target.trim());
        if host.is_empty() || target.is_empty() {
            bail!("Empty host or target in entry `{}`.", entry);
        }

        Ok((host.to_string(), target.to_string()))
    }
}

impl Store for MemoryStore {
    fn load(&mut self) -> Result<HashMap<String, String>> {
        Ok(self.records.clone())
    }

    fn add(&mut self, host: &str, target: &str) -> Result<()> {
        match self.records.entry(host.to_string()) {
            Entry::Occupied(_) => Err(anyhow!("Record `{}` already stored.", host)),
            Entry::Vacant(entry) => {
                entry.insert(target.to_string());
                Ok(())
            }
        }
    }

    fn remove(&mut self, host: &str) -> Result<()> {
        self.records
            .remove(host)
            .map(|_| ())
            .ok_or(anyhow!("Record `{}` not stored.", host))
    }

    fn modify(&mut self, host: &str, target: &str) -> Result<()> {
        let record = self
            .records
            .get_mut(host)
            .ok_or(anyhow!("Record `{}` not stored.", host))?;
        *record = target.to_string();

        Ok(())
    }
}

impl FromStr for MemoryStore {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut store = Self::new();

        for entry in s.split(',').flat_map(str::split_whitespace) {
            let (host, target) = Self::parse_entry(entry)?;
            store.add(&host, &target)?;
        }

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(host, target)| (host.to_string(), target.to_string()))
            .collect()
    }

    #[test]
    fn test_memory_store_from_str() {
        let test_cases = vec![
            // empty
            ("", vec![]),
            // whitespace only
            ("  ,  ", vec![]),
            // single entry
            ("a.com=b1", vec![("a.com", "b1")]),
            // comma-separated entries
            ("a.com=b1,c.com=b2", vec![("a.com", "b1"), ("c.com", "b2")]),
            // mixed comma and space separation
            (
                " a.com=b1, c.com=b2 d.com:8080=b3 ",
                vec![("a.com", "b1"), ("c.com", "b2"), ("d.com:8080", "b3")],
            ),
            // target containing the separator
            ("a.com=k=v", vec![("a.com", "k=v")]),
        ];

        for (input, expected) in test_cases {
            let store = MemoryStore::from_str(input).unwrap();
            assert_eq!(
                store.records(),
                &records(&expected),
                "Failed for input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_memory_store_from_str_rejects_invalid() {
        let invalid = vec!["a.com", "=b1", "a.com=", "a.com=b1,a.com=b2"];

        for input in invalid {
            assert!(
                MemoryStore::from_str(input).is_err(),
                "Expected error for input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_memory_store_behaves_like_unique_table() {
        let mut store = MemoryStore::new();

        store.add("a.com", "b1").unwrap();
        assert!(store.add("a.com", "b2").is_err());
        assert_eq!(store.load().unwrap(), records(&[("a.com", "b1")]));

        store.modify("a.com", "b3").unwrap();
        assert!(store.modify("x.com", "b3").is_err());
        assert_eq!(store.load().unwrap(), records(&[("a.com", "b3")]));

        store.remove("a.com").unwrap();
        assert!(store.remove("a.com").is_err());
        assert!(store.load().unwrap().is_empty());
    }
}
