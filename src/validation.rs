use email_address::EmailAddress;

use crate::error::{AppError, AppResult};
use crate::models::User;

/// Check that a user is structurally valid before it is persisted.
///
/// The name must be non-empty and the email must parse as a mailbox address
/// (`local-part@domain`, RFC 5322). No lookup of any kind is performed.
pub fn validate_user(user: &User) -> AppResult<()> {
    if user.name.is_empty() {
        return Err(AppError::InvalidUserName);
    }
    if !validate_email(&user.email) {
        return Err(AppError::InvalidUserEmail);
    }
    Ok(())
}

/// Validates email format according to RFC 5322
pub fn validate_email(email: &str) -> bool {
    EmailAddress::is_valid(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_valid_user() {
        let user = User::new("Jane Smith", "jane.smith@example.com");
        assert!(validate_user(&user).is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected_whatever_the_email() {
        for email in ["jane.smith@example.com", "not-an-email", ""] {
            let err = validate_user(&User::new("", email)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidUserName, "email: {:?}", email);
        }
    }

    #[test]
    fn test_malformed_email_is_rejected_whatever_the_name() {
        for name in ["John Doe", "x", "12-Han-Solo-7"] {
            for email in ["not-an-email", "", "@example.com", "john@", "john doe@example.com"] {
                let err = validate_user(&User::new(name, email)).unwrap_err();
                assert_eq!(
                    err.kind(),
                    ErrorKind::InvalidUserEmail,
                    "name: {:?}, email: {:?}",
                    name,
                    email
                );
            }
        }
    }

    #[test]
    fn test_email_formats() {
        assert!(validate_email("user@email.com"));
        assert!(validate_email("first.last+tag@sub.example.org"));
        assert!(!validate_email("plainaddress"));
        assert!(!validate_email("two@@example.com"));
    }
}
