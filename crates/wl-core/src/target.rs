//! Addressable object identity on the remote transformation service.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identity of an addressable object in a remote transformation project:
/// optional database, optional schema, mandatory name.
///
/// Unset segments stay unset. The remote service treats an absent database
/// or schema in a selection as "match by name alone"; backfilling them with
/// empty strings would turn a bare-name selection into an exact match that
/// hits nothing (or, worse, hits unrelated objects whose fields happen to be
/// empty). Callers that want a fully qualified identity use
/// [`Target::qualified`]; everything else uses [`Target::bare`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Target {
    /// Database (project) containing the object, if qualified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// Schema (dataset) containing the object, if qualified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Object name
    pub name: String,
}

impl Target {
    /// A name-only target. Database and schema are left unset.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            database: None,
            schema: None,
            name: name.into(),
        }
    }

    /// A fully qualified target.
    pub fn qualified(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database: Some(database.into()),
            schema: Some(schema.into()),
            name: name.into(),
        }
    }

    /// Parse a CLI-style target spec.
    ///
    /// Accepted shapes: `name`, `schema.name`, `database.schema.name`.
    pub fn parse(spec: &str) -> CoreResult<Self> {
        let parts: Vec<&str> = spec.split('.').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(CoreError::InvalidTarget {
                spec: spec.to_string(),
                reason: "empty segment".to_string(),
            });
        }
        match parts.as_slice() {
            [name] => Ok(Target::bare(name.trim())),
            [schema, name] => Ok(Target {
                database: None,
                schema: Some(schema.trim().to_string()),
                name: name.trim().to_string(),
            }),
            [database, schema, name] => Ok(Target::qualified(
                database.trim(),
                schema.trim(),
                name.trim(),
            )),
            _ => Err(CoreError::InvalidTarget {
                spec: spec.to_string(),
                reason: "expected name, schema.name, or database.schema.name".to_string(),
            }),
        }
    }

    /// Whether the target carries no database or schema qualification.
    pub fn is_bare(&self) -> bool {
        self.database.is_none() && self.schema.is_none()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(db) = &self.database {
            write!(f, "{}.", db)?;
        }
        if let Some(schema) = &self.schema {
            write!(f, "{}.", schema)?;
        }
        f.write_str(&self.name)
    }
}

#[cfg(test)]
#[path = "target_test.rs"]
mod tests;
