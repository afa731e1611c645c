use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical hyphenated UUID length (8-4-4-4-12)
const TENANT_ID_LENGTH: usize = 36;

/// Identifier of the tenant that owns a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(Uuid);

impl TenantId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TenantId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for TenantId {
    type Err = CoreError;

    /// Only the hyphenated form is accepted; braced, URN and simple forms are rejected.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        if s.len() != TENANT_ID_LENGTH {
            return Err(CoreError::InvalidTenantId {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Uuid::parse_str(s)
            .map(Self)
            .map_err(|source| CoreError::Uuid {
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
