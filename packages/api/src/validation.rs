//! Client-side form checks, run before any request is sent.

use thiserror::Error;

use crate::models::{LoginRequest, RegisterRequest};

pub const MIN_NAME_LEN: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const ITSON_ID_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Name must be at least 6 characters")]
    NameTooShort,
    #[error("ITSON ID must be exactly 6 digits")]
    InvalidItsonId,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Title and description are required")]
    MissingTitleOrDescription,
}

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Registration form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub itson_id: String,
    pub password: String,
}

impl RegisterForm {
    /// Checks run in order: all fields present, name length, ITSON id, password length.
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let itson_id = self.itson_id.trim();

        if name.is_empty() || email.is_empty() || itson_id.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort);
        }
        if !is_itson_id(itson_id) {
            return Err(ValidationError::InvalidItsonId);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }

        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            itson_id: itson_id.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Exactly six ASCII digits.
pub fn is_itson_id(value: &str) -> bool {
    value.len() == ITSON_ID_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterForm {
        RegisterForm {
            name: "Ana Lopez".to_string(),
            email: "ana@itson.edu.mx".to_string(),
            itson_id: "123456".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_itson_id_must_be_six_digits() {
        assert!(is_itson_id("000123"));
        for bad in ["12345", "1234567", "12a456", "١٢٣٤٥٦", "12 456", "-12345"] {
            assert!(!is_itson_id(bad), "{bad} should be rejected");
            let form = RegisterForm {
                itson_id: bad.to_string(),
                ..valid_register()
            };
            assert_eq!(form.validate(), Err(ValidationError::InvalidItsonId));
        }
    }

    #[test]
    fn test_name_and_password_minimums() {
        let form = RegisterForm {
            name: "Ana L".to_string(),
            ..valid_register()
        };
        assert_eq!(form.validate(), Err(ValidationError::NameTooShort));

        // Surrounding whitespace does not count towards the name.
        let form = RegisterForm {
            name: "  Ana  ".to_string(),
            ..valid_register()
        };
        assert_eq!(form.validate(), Err(ValidationError::NameTooShort));

        let form = RegisterForm {
            password: "12345".to_string(),
            ..valid_register()
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));

        let form = RegisterForm {
            name: "Ángela".to_string(),
            password: "ñññññ1".to_string(),
            ..valid_register()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_checked_first() {
        let form = RegisterForm {
            email: " ".to_string(),
            name: "x".to_string(),
            ..valid_register()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_register_trims_but_keeps_password() {
        let form = RegisterForm {
            name: " Ana Lopez ".to_string(),
            email: " ana@itson.edu.mx ".to_string(),
            itson_id: " 123456 ".to_string(),
            password: " secret ".to_string(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Ana Lopez");
        assert_eq!(request.email, "ana@itson.edu.mx");
        assert_eq!(request.itson_id, "123456");
        assert_eq!(request.password, " secret ");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            email: "  ".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));

        let form = LoginForm {
            email: " ana@itson.edu.mx".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));

        let form = LoginForm {
            email: " ana@itson.edu.mx".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(form.validate().unwrap().email, "ana@itson.edu.mx");
    }
}
