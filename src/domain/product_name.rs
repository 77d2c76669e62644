#[derive(Debug, Clone)]
pub struct ProductName(String);

impl ProductName {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            Err("product name is blank.".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
