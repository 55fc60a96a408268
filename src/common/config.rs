use crate::common::TABLE_NAME_DEFAULT;

pub const TABLE_NAME_ENV: &str = "TABLE_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table_name = lookup(TABLE_NAME_ENV).unwrap_or(TABLE_NAME_DEFAULT.into());

        Self { table_name }
    }
}
