use std::str::FromStr;

use anyhow::{anyhow, bail, Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get { host: String },
    Add { host: String, target: String },
    Del { host: String },
    Modify { host: String, target: String },
    Load,
    List,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let (name, args) = words
            .split_first()
            .ok_or(anyhow!("Empty command."))?;
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();

        let command = match (name.to_lowercase().as_str(), args.as_slice()) {
            ("get", [host]) => Self::Get { host: host.clone() },
            ("add", [host, target]) => Self::Add {
                host: host.clone(),
                target: target.clone(),
            },
            ("del", [host]) => Self::Del { host: host.clone() },
            ("modify", [host, target]) => Self::Modify {
                host: host.clone(),
                target: target.clone(),
            },
            ("load", []) => Self::Load,
            ("list", []) => Self::List,
            ("get" | "add" | "del" | "modify" | "load" | "list", _) => {
                bail!("Wrong number of arguments for `{}`.", name)
            }
            _ => bail!("Unknown command `{}`.", name),
        };

        Ok(command)
    }
}
