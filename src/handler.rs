use std::collections::BTreeMap;

use anyhow::{Context, Result};
use log::info;

use crate::{command::Command, host_map::SharedHostMap, store::Store};

/// Applies console commands to a shared [`HostMap`](crate::host_map::HostMap).
pub struct Handler<S> {
    map: SharedHostMap<S>,
}

impl<S: Store> Handler<S> {
    pub fn new(map: SharedHostMap<S>) -> Self {
        Self { map }
    }

    /// Runs `command` and returns the text to print.
    pub async fn handle(&self, command: Command) -> Result<String> {
        match command {
            Command::Get { host } => {
                let map = self.map.read().await;
                let target = map.get(&host)?;

                Ok(target.to_string())
            }

            Command::Add { host, target } => {
                self.map
                    .write()
                    .await
                    .add(&host, &target)
                    .context(format!("Failed to add `{}`.", host))?;
                info!("Added host `{}` with target `{}`.", host, target);

                Ok("OK".to_string())
            }

            Command::Del { host } => {
                self.map
                    .write()
                    .await
                    .del(&host)
                    .context(format!("Failed to delete `{}`.", host))?;
                info!("Deleted host `{}`.", host);

                Ok("OK".to_string())
            }

            Command::Modify { host, target } => {
                self.map
                    .write()
                    .await
                    .modify(&host, &target)
                    .context(format!("Failed to modify `{}`.", host))?;
                info!("Modified host `{}` with target `{}`.", host, target);

                Ok("OK".to_string())
            }

            Command::Load => {
                let mut map = self.map.write().await;
                map.load().context("Failed to load entries from store.")?;
                info!("Loaded {} entries from store.", map.len());

                Ok(map.len().to_string())
            }

            Command::List => {
                let map = self.map.read().await;
                let entries: BTreeMap<_, _> = map.entries().iter().collect();

                Ok(entries
                    .into_iter()
                    .map(|(host, target)| format!("{} {}", host, target))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }
}
