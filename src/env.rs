use std::{env::var, str::FromStr, sync::LazyLock};

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::{constants::*, memory_store::MemoryStore};

fn create_error_msg(key: &str, value: &str) -> String {
    format!(
        "Failed to parse environment variable `{}` with value `{}`.",
        key, value
    )
}

fn get_parsed_env<T>(key: &str, default_value: Option<&str>) -> Result<T>
where
    T: FromStr,
    Result<T, <T as FromStr>::Err>: Context<T, <T as FromStr>::Err>,
{
    match var(key) {
        Ok(value) => {
            debug!(
                "Environment variable `{}` found with value `{}`.",
                key, value
            );
            value.parse::<T>().context(create_error_msg(key, &value))
        }

        Err(_) => {
            if let Some(default_value) = default_value {
                debug!(
                    "Environment variable `{}` not found. Using default value `{}`.",
                    key, default_value
                );
                default_value
                    .parse::<T>()
                    .context(create_error_msg(key, default_value))
            } else {
                Err(anyhow!("Environment variable `{}` not found.", key))
            }
        }
    }
}

static ENTRIES: LazyLock<Result<MemoryStore>> =
    LazyLock::new(|| get_parsed_env(ENTRIES_ENV, Some(DEFAULT_ENTRIES)));

pub struct Env {}

impl Env {
    fn get_entries() -> Result<MemoryStore> {
        match &*ENTRIES {
            Ok(entries) => Ok(entries.clone()),
            Err(err) => Err(anyhow!("{:#}", err)),
        }
    }

    pub fn validate() -> Result<()> {
        Self::get_entries()?;

        Ok(())
    }

    /// Seed store built from `HOST_MAP_ENTRIES`.
    ///
    /// Call [`Env::validate`] first.
    pub fn seed_store() -> Result<MemoryStore> {
        Self::get_entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::env::set_var;

    #[test]
    fn test_get_parsed_env() {
        set_var("HOST_MAP_TEST_PRESENT", "a.com=b1 c.com=b2");
        let store: MemoryStore = get_parsed_env("HOST_MAP_TEST_PRESENT", None).unwrap();
        assert_eq!(store.records().len(), 2);

        let store: MemoryStore =
            get_parsed_env("HOST_MAP_TEST_MISSING", Some("a.com=b1")).unwrap();
        assert_eq!(store.records().len(), 1);

        let err = get_parsed_env::<MemoryStore>("HOST_MAP_TEST_MISSING", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable `HOST_MAP_TEST_MISSING` not found."
        );

        set_var("HOST_MAP_TEST_INVALID", "a.com");
        let err = get_parsed_env::<MemoryStore>("HOST_MAP_TEST_INVALID", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to parse environment variable `HOST_MAP_TEST_INVALID` with value `a.com`."
        );
    }
}
