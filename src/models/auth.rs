use std::fmt;

use serde_json::Value;

use crate::error::AppError;

pub const SIGNUP_REQUIRED: &str = "email, password, username and role are required";
pub const SIGNIN_REQUIRED: &str = "email and password are required";

const REDACTED: &str = "[redacted]";

/// Logical route chosen by the `x-function-route` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRoute {
    SignUp,
    SignIn,
}

impl AuthRoute {
    /// Both routes accept POST only; anything else is unmatched.
    pub fn resolve(route: Option<&str>, method: &str) -> Option<Self> {
        match (route, method) {
            (Some("signup"), "POST") => Some(AuthRoute::SignUp),
            (Some("signin"), "POST") => Some(AuthRoute::SignIn),
            _ => None,
        }
    }
}

// A field is present only as a non-empty string; missing, null, empty or
// non-string values are all absent.
fn text_field(body: &Value, key: &str) -> Option<String> {
    body.get(key)?
        .as_str()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn missing(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

/// Sign-up fields as received. A non-object body yields no fields.
pub struct SignUpRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
    pub role: Option<String>,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("username", &self.username)
            .field("role", &self.role)
            .finish()
    }
}

impl SignUpRequest {
    pub fn from_json(body: &Value) -> Self {
        Self {
            email: text_field(body, "email"),
            password: text_field(body, "password"),
            username: text_field(body, "username"),
            role: text_field(body, "role"),
        }
    }

    /// Names of the required fields that are absent
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("email", self.email.is_some()),
            ("password", self.password.is_some()),
            ("username", self.username.is_some()),
            ("role", self.role.is_some()),
        ])
    }

    pub fn validate(self) -> Result<SignUp, AppError> {
        match (self.email, self.password, self.username, self.role) {
            (Some(email), Some(password), Some(username), Some(role)) => Ok(SignUp {
                email,
                password,
                username,
                role,
            }),
            _ => Err(AppError::Validation(SIGNUP_REQUIRED.to_string())),
        }
    }
}

/// Validated sign-up credentials
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub username: String,
    pub role: String,
}

impl fmt::Debug for SignUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUp")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish()
    }
}

pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl SignInRequest {
    pub fn from_json(body: &Value) -> Self {
        Self {
            email: text_field(body, "email"),
            password: text_field(body, "password"),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("email", self.email.is_some()),
            ("password", self.password.is_some()),
        ])
    }

    pub fn validate(self) -> Result<SignIn, AppError> {
        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok(SignIn { email, password }),
            _ => Err(AppError::Validation(SIGNIN_REQUIRED.to_string())),
        }
    }
}

/// Validated sign-in credentials
pub struct SignIn {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignIn")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn signup_from(value: Value) -> SignUpRequest {
        SignUpRequest::from_json(&value)
    }

    #[test]
    fn resolves_known_routes_on_post_only() {
        assert_eq!(AuthRoute::resolve(Some("signup"), "POST"), Some(AuthRoute::SignUp));
        assert_eq!(AuthRoute::resolve(Some("signin"), "POST"), Some(AuthRoute::SignIn));
        assert_eq!(AuthRoute::resolve(Some("signin"), "GET"), None);
        assert_eq!(AuthRoute::resolve(Some("logout"), "POST"), None);
        assert_eq!(AuthRoute::resolve(None, "POST"), None);
    }

    #[test]
    fn complete_signup_validates() {
        let signup = signup_from(json!({
            "email": "a@b.com",
            "password": "secret",
            "username": "alice",
            "role": "teacher",
        }))
        .validate()
        .unwrap();

        assert_eq!(signup.email, "a@b.com");
        assert_eq!(signup.username, "alice");
        assert_eq!(signup.role, "teacher");
    }

    #[test]
    fn signup_missing_any_field_is_rejected() {
        let full = json!({
            "email": "a@b.com",
            "password": "secret",
            "username": "alice",
            "role": "teacher",
        });

        for field in ["email", "password", "username", "role"] {
            for absent in [None, Some(json!(null)), Some(json!(""))] {
                let mut body = full.clone();
                match absent {
                    None => {
                        body.as_object_mut().unwrap().remove(field);
                    }
                    Some(value) => body[field] = value,
                }

                let err = signup_from(body).validate().unwrap_err();
                assert_eq!(err.to_string(), SIGNUP_REQUIRED, "field {field}");
            }
        }
    }

    #[test]
    fn signin_requires_email_and_password() {
        let request = SignInRequest::from_json(&json!({ "email": "a@b.com" }));
        assert_eq!(request.missing_fields(), vec!["password"]);
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), SIGNIN_REQUIRED);

        let request = SignInRequest::from_json(&json!({ "email": "a@b.com", "password": "x" }));
        assert!(request.missing_fields().is_empty());
        let signin = request.validate().unwrap();
        assert_eq!(signin.email, "a@b.com");
        assert_eq!(signin.password, "x");
    }

    #[test]
    fn non_string_fields_count_as_absent() {
        let request = signup_from(json!({ "email": 1 }));
        assert_eq!(
            request.missing_fields(),
            vec!["email", "password", "username", "role"]
        );
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), SIGNUP_REQUIRED);

        let request = signup_from(json!({
            "email": "a@b.com",
            "password": "secret",
            "username": ["alice"],
            "role": "teacher",
        }));
        assert_eq!(request.missing_fields(), vec!["username"]);
    }

    #[test]
    fn non_object_body_has_no_fields() {
        for body in [json!([1, 2]), json!("signup"), json!(null)] {
            let request = signup_from(body);
            assert_eq!(request.missing_fields().len(), 4);
            assert!(request.validate().is_err());
        }
    }

    #[test]
    fn debug_output_redacts_password() {
        let request = signup_from(json!({
            "email": "a@b.com",
            "password": "hunter2",
            "username": "alice",
            "role": "teacher",
        }));
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains(REDACTED));

        let signup = request.validate().unwrap();
        assert!(!format!("{:?}", signup).contains("hunter2"));
    }
}
