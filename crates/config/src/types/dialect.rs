//! Supported database engines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Database engine named by `DB_DIALECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbDialect {
    Mysql,
    Postgres,
    Sqlite,
    Mariadb,
    Mssql,
    Oracle,
}

impl DbDialect {
    /// All accepted dialect strings, in schema order.
    pub const ALLOWED: &'static [&'static str] =
        &["mysql", "postgres", "sqlite", "mariadb", "mssql", "oracle"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::Mariadb => "mariadb",
            Self::Mssql => "mssql",
            Self::Oracle => "oracle",
        }
    }
}

impl fmt::Display for DbDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbDialect {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(Self::Mysql),
            "postgres" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            "mariadb" => Ok(Self::Mariadb),
            "mssql" => Ok(Self::Mssql),
            "oracle" => Ok(Self::Oracle),
            _ => Err(()),
        }
    }
}
