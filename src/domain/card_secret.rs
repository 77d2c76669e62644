use secrecy::{ExposeSecret, SecretString};

/// The code delivered to the buyer. Orders for several items carry one code per line.
/// Codes are kept exactly as given, surrounding whitespace included.
#[derive(Debug, Clone)]
pub struct CardSecret(SecretString);

impl CardSecret {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("card secret is empty.".to_string());
        }
        Ok(Self(SecretString::from(s)))
    }

    pub fn codes(&self) -> Vec<&str> {
        self.0
            .expose_secret()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

impl ExposeSecret<str> for CardSecret {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}
