//! Static action policy table.

use bordergate_core::Role;
use std::fmt::{Display, Formatter};

/// An action a caller may attempt against the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Read passenger records (list or single).
    ReadPassenger,
    /// Create a passenger record.
    CreatePassenger,
    /// Update a passenger record.
    UpdatePassenger,
    /// Delete a passenger record.
    DeletePassenger,
    /// Prove the current password for the authenticated identity.
    Reauthenticate,
}

impl Action {
    /// Roles allowed to invoke this action.
    #[must_use]
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Action::ReadPassenger => &[Role::User, Role::Admin],
            Action::CreatePassenger
            | Action::UpdatePassenger
            | Action::DeletePassenger
            | Action::Reauthenticate => &[Role::Admin],
        }
    }

    /// Whether the action mutates state and therefore requires a fresh
    /// password proof on top of a valid token.
    #[must_use]
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            Action::CreatePassenger
                | Action::UpdatePassenger
                | Action::DeletePassenger
                | Action::Reauthenticate
        )
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::ReadPassenger => "read_passenger",
            Action::CreatePassenger => "create_passenger",
            Action::UpdatePassenger => "update_passenger",
            Action::DeletePassenger => "delete_passenger",
            Action::Reauthenticate => "reauthenticate",
        };
        f.write_str(name)
    }
}
