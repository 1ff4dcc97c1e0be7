//! User roles and session context

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User role
///
/// Closed set, matched exhaustively. Role strings from the wire must go
/// through [`UserRole::parse`]; unknown roles are an error, never a
/// silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Host,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Host => "host",
            Self::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(Self::Customer),
            "host" => Some(Self::Host),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current-user identity, passed explicitly to whatever needs it.
///
/// Deliberately not a global: the component that owns the session hands
/// this to the booking service per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl SessionContext {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Whether this user may manage booking statuses (confirm/reject/complete).
    pub fn can_manage_bookings(&self) -> bool {
        match self.role {
            UserRole::Host | UserRole::Admin => true,
            UserRole::Customer => false,
        }
    }

    /// Whether this user may act on a booking owned by `owner_id`.
    pub fn can_act_on(&self, owner_id: Uuid) -> bool {
        self.user_id == owner_id || self.role == UserRole::Admin
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip() {
        for role in [UserRole::Customer, UserRole::Host, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn unknown_role_is_not_coerced() {
        assert_eq!(UserRole::parse("superuser"), None);
        assert_eq!(UserRole::parse("Admin"), None);
    }

    #[test]
    fn customers_cannot_manage_bookings() {
        let ctx = SessionContext::new(Uuid::new_v4(), UserRole::Customer);
        assert!(!ctx.can_manage_bookings());
    }

    #[test]
    fn hosts_and_admins_manage_bookings() {
        assert!(SessionContext::new(Uuid::new_v4(), UserRole::Host).can_manage_bookings());
        assert!(SessionContext::new(Uuid::new_v4(), UserRole::Admin).can_manage_bookings());
    }

    #[test]
    fn owner_and_admin_can_act_on_booking() {
        let owner = Uuid::new_v4();
        let ctx = SessionContext::new(owner, UserRole::Customer);
        assert!(ctx.can_act_on(owner));

        let admin = SessionContext::new(Uuid::new_v4(), UserRole::Admin);
        assert!(admin.can_act_on(owner));

        let stranger = SessionContext::new(Uuid::new_v4(), UserRole::Customer);
        assert!(!stranger.can_act_on(owner));
    }
}
