//! RBAC enforcement logic.
//!
//! Roles form a flat closed set with no privilege ladder: an operation
//! declares the roles that may perform it and the check passes when the
//! caller holds at least one of them. Denial is distinct from an
//! authentication failure and is only meaningful once an identity has
//! already been resolved.

use staffhub_entity::user::UserRole;

use crate::error::AuthError;

/// Enforces role-based access control for protected operations.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether the held role set intersects the required one.
    pub fn has_any(&self, held: &[UserRole], required: &[UserRole]) -> bool {
        held.iter().any(|role| required.contains(role))
    }

    /// Requires a non-empty intersection between held and required roles.
    ///
    /// Returns `Ok(())` if allowed, or [`AuthError::RoleDenied`] otherwise.
    pub fn require_any(&self, held: &[UserRole], required: &[UserRole]) -> Result<(), AuthError> {
        if self.has_any(held, required) {
            Ok(())
        } else {
            Err(AuthError::RoleDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_intersection_allows() {
        let enforcer = RbacEnforcer::new();
        assert!(
            enforcer
                .require_any(
                    &[UserRole::User, UserRole::Manager],
                    &[UserRole::Admin, UserRole::Manager],
                )
                .is_ok()
        );
    }

    #[test]
    fn empty_intersection_denies() {
        let enforcer = RbacEnforcer::new();
        assert!(matches!(
            enforcer.require_any(&[UserRole::User], &[UserRole::Admin, UserRole::Hr]),
            Err(AuthError::RoleDenied)
        ));
    }

    #[test]
    fn empty_held_set_denies() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer.require_any(&[], &[UserRole::User]).is_err());
    }

    #[test]
    fn specific_role_requirement_is_membership() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer.has_any(&[UserRole::Hr], &[UserRole::Hr]));
        assert!(!enforcer.has_any(&[UserRole::Hr], &[UserRole::Admin]));
    }
}
