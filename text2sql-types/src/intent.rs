use serde::{Deserialize, Serialize};

/// Closed set of intents this service handles. Anything else is rejected
/// with an explicit "unrecognized intent" response instead of falling
/// through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "mysql_create_table")]
    MysqlCreateTable,
    #[serde(rename = "mysql_query_create")]
    MysqlQueryCreate,
}

impl Intent {
    /// Parse an intent label by exact string match.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "mysql_create_table" => Some(Intent::MysqlCreateTable),
            "mysql_query_create" => Some(Intent::MysqlQueryCreate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MysqlCreateTable => "mysql_create_table",
            Intent::MysqlQueryCreate => "mysql_query_create",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
