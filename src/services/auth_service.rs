use crate::config::AuthConfig;
use crate::error::{AuthError, ValidationError};
use crate::models::LoginForm;

/// Issues a token for a valid identity/secret pair
pub trait Authenticator {
    fn authenticate(&self, identity: &str, secret: &str) -> Result<String, AuthError>;
}

/// Accepts exactly one configured pair. Stand-in for a real credential backend.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    identity: String,
    secret: String,
}

impl StaticCredentials {
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.demo_email, &config.demo_password)
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, identity: &str, secret: &str) -> Result<String, AuthError> {
        if identity == self.identity && secret == self.secret {
            Ok(format!("mock-{}", uuid::Uuid::new_v4()))
        } else {
            log::warn!("🔐 [AUTH] rejected credentials for {}", identity);
            Err(AuthError::InvalidCredentials)
        }
    }
}

const MIN_PASSWORD_LEN: usize = 6;

/// Local checks before the credentials are looked at
pub fn validate_login(form: &LoginForm) -> Result<(), ValidationError> {
    if form.email.is_empty() {
        return Err(ValidationError::new("email", "Please enter your email!"));
    }
    if !looks_like_email(&form.email) {
        return Err(ValidationError::new("email", "Please enter a valid email!"));
    }
    if form.password.is_empty() {
        return Err(ValidationError::new("password", "Please enter your password!"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            "password",
            "Password must be at least 6 characters!",
        ));
    }
    Ok(())
}

/// `local@domain.tld`, no whitespace
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
                    .unwrap_or(false)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_only_the_configured_pair() {
        let auth = StaticCredentials::new("omar@gmail.com", "123456");
        let token = auth.authenticate("omar@gmail.com", "123456").unwrap();
        assert!(token.starts_with("mock-"));

        for (id, secret) in [
            ("omar@gmail.com", "1234567"),
            ("Omar@gmail.com", "123456"),
            ("other@gmail.com", "123456"),
            ("", ""),
        ] {
            assert_eq!(auth.authenticate(id, secret), Err(AuthError::InvalidCredentials));
        }
    }

    #[test]
    fn tokens_are_opaque_and_fresh() {
        let auth = StaticCredentials::new("a@b.io", "secret");
        let a = auth.authenticate("a@b.io", "secret").unwrap();
        let b = auth.authenticate("a@b.io", "secret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn validation_rules() {
        assert_eq!(validate_login(&form("", "123456")).unwrap_err().field, "email");
        assert_eq!(validate_login(&form("omar", "123456")).unwrap_err().field, "email");
        assert_eq!(validate_login(&form("omar@gmail", "123456")).unwrap_err().field, "email");
        assert_eq!(validate_login(&form("a b@c.io", "123456")).unwrap_err().field, "email");
        assert_eq!(validate_login(&form("omar@gmail.com", "")).unwrap_err().field, "password");
        assert_eq!(
            validate_login(&form("omar@gmail.com", "12345")).unwrap_err().message,
            "Password must be at least 6 characters!"
        );
        assert!(validate_login(&form("omar@gmail.com", "123456")).is_ok());
    }
}
