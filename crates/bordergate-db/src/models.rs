//! Account and passenger models.

use bordergate_core::{AccountId, PassengerId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored account.
///
/// The credential is an opaque PHC-formatted password hash; the raw
/// password never reaches a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier.
    pub id: AccountId,
    /// Unique, case-sensitive username.
    pub username: String,
    /// Opaque password hash.
    pub password_hash: String,
    /// Account role.
    pub role: Role,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Unique, case-sensitive username.
    pub username: String,
    /// Opaque password hash.
    pub password_hash: String,
    /// Account role.
    pub role: Role,
}

/// A border-entry passenger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Passenger {
    /// Unique record identifier.
    pub id: PassengerId,
    /// Passenger's full name.
    pub full_name: String,
    /// Passport number as recorded at entry.
    pub passport_number: String,
    /// Passenger's nationality.
    pub nationality: String,
    /// When the passenger entered.
    pub entry_date: DateTime<Utc>,
}

/// Input for creating or replacing a passenger record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewPassenger {
    /// Passenger's full name.
    pub full_name: String,
    /// Passport number as recorded at entry.
    pub passport_number: String,
    /// Passenger's nationality.
    pub nationality: String,
    /// When the passenger entered.
    pub entry_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_serde_roundtrip() {
        let passenger = Passenger {
            id: PassengerId::new(),
            full_name: "Jane Doe".to_string(),
            passport_number: "X1234567".to_string(),
            nationality: "NL".to_string(),
            entry_date: Utc::now(),
        };

        let json = serde_json::to_string(&passenger).unwrap();
        let back: Passenger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, passenger);
    }

    #[test]
    fn test_account_role_defaults_via_core() {
        let account = Account {
            id: AccountId::new(),
            username: "alice".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role: Role::default(),
            created_at: Utc::now(),
        };
        assert_eq!(account.role, Role::User);
    }
}
