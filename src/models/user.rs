//! User model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::utils::errors::{OrbitViewError, Result};
use crate::utils::helpers::is_valid_email;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl User {
    /// Full name, falling back to the username when no name is set
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair issued by `/auth/jwt/create/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub re_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

impl RegisterRequest {
    /// Check the form before it reaches the backend
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("Username", &self.username),
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(OrbitViewError::InvalidInput(format!("{} is required", label)));
            }
        }

        if !is_valid_email(&self.email) {
            return Err(OrbitViewError::InvalidInput(format!("Invalid email address: {}", self.email)));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(OrbitViewError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        if self.password != self.re_password {
            return Err(OrbitViewError::InvalidInput("Passwords do not match".to_string()));
        }

        if let Some(dob) = self.date_of_birth {
            if dob >= chrono::Utc::now().date_naive() {
                return Err(OrbitViewError::InvalidInput("Date of birth must be in the past".to_string()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            username: "johndoe123".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "correct-horse".to_string(),
            re_password: "correct-horse".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 4, 12),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_registration_rejects_mismatched_passwords() {
        let mut request = valid_request();
        request.re_password = "something-else".to_string();
        assert!(matches!(request.validate(), Err(OrbitViewError::InvalidInput(_))));
    }

    #[test]
    fn test_registration_rejects_short_password_and_bad_email() {
        let mut request = valid_request();
        request.password = "short".to_string();
        request.re_password = "short".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.email = "john.example.com".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_registration_rejects_future_birth_date() {
        let mut request = valid_request();
        request.date_of_birth = NaiveDate::from_ymd_opt(2999, 1, 1);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_display_name() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1, "username": "ada", "email": "ada@example.com",
            "first_name": "", "last_name": ""
        }))
        .unwrap();
        assert_eq!(user.display_name(), "ada");
    }
}
