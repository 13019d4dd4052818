#[derive(PartialEq, Debug, Clone)]
pub struct Password(String);

impl Password {
    // Credential checking is the provider's job; only presence is enforced
    // before the external call.
    pub fn parse(password: String) -> Result<Password, String> {
        if password.is_empty() {
            return Err("Password must not be empty".to_owned());
        }
        Ok(Password(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
