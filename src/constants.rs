pub const ENTRIES_ENV: &str = "HOST_MAP_ENTRIES";
pub const DEFAULT_ENTRIES: &str = "";

pub const ENTRY_SEPARATOR: char = '=';

pub const DEFAULT_LOG_FILTER: &str = "info";
