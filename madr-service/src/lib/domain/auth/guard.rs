use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Principal;
use crate::domain::user::models::UserId;

/// Allow a mutation of a user record only by the record's owner.
///
/// No role or administrator override exists.
///
/// # Errors
/// * `Forbidden` - `principal` is not `target`
pub fn authorize_mutation(principal: &Principal, target: UserId) -> Result<(), AuthError> {
    if principal.id() == target {
        Ok(())
    } else {
        tracing::warn!(
            principal_id = %principal.id(),
            target_id = %target,
            "Mutation rejected: not the owner"
        );
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::User;
    use crate::domain::user::models::Username;

    fn principal(id: i64) -> Principal {
        Principal::from(&User {
            id: UserId(id),
            username: Username::new(format!("user_{}", id)).unwrap(),
            email: EmailAddress::new(format!("user_{}@x.com", id)).unwrap(),
            password_hash: String::new(),
            created_at: Utc::now(),
        })
    }

    #[test]
    fn test_owner_may_mutate() {
        assert_eq!(authorize_mutation(&principal(5), UserId(5)), Ok(()));
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let result = authorize_mutation(&principal(5), UserId(7));

        assert_eq!(result, Err(AuthError::Forbidden));
        assert_eq!(result.unwrap_err().to_string(), "Not enough permissions.");
    }
}
