/// Display text of the shop link at the bottom of the email.
#[derive(Debug, Clone)]
pub struct ShopName(String);

impl ShopName {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("shop name is blank.".to_string());
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ShopName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
