//! Request validation shared by the builders

use types::errors::ReconcileError;
use types::identity::{Identity, Role};

/// The requested item list must be non-empty and contain no blank names
pub fn requested_names<S: AsRef<str>>(names: &[S]) -> Result<(), ReconcileError> {
    if names.is_empty() {
        return Err(ReconcileError::InvalidArgument(
            "invalid list of `items`. please provide a valid list of `items`.".to_string(),
        ));
    }
    if names.iter().any(|name| name.as_ref().trim().is_empty()) {
        return Err(ReconcileError::InvalidArgument(
            "`items` must not contain blank names".to_string(),
        ));
    }
    Ok(())
}

/// The caller must hold `required`
pub fn require_role(identity: &Identity, required: Role) -> Result<(), ReconcileError> {
    if identity.role == required {
        Ok(())
    } else {
        Err(ReconcileError::RoleMismatch {
            required,
            actual: identity.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::AccountId;

    #[test]
    fn test_empty_list_rejected() {
        let names: [&str; 0] = [];
        assert!(matches!(
            requested_names(&names),
            Err(ReconcileError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(requested_names(&["apple", "  "]).is_err());
    }

    #[test]
    fn test_valid_names_accepted() {
        assert!(requested_names(&["apple", "apple"]).is_ok());
    }

    #[test]
    fn test_role_gate() {
        let buyer = Identity::buyer(AccountId::new());
        assert!(require_role(&buyer, Role::Buyer).is_ok());
        assert_eq!(
            require_role(&buyer, Role::Seller),
            Err(ReconcileError::RoleMismatch {
                required: Role::Seller,
                actual: Role::Buyer,
            })
        );
    }
}
