use validator::ValidateUrl;

/// Link target of the shop link. Stricter than plain URL validity: only `http`
/// and `https` are accepted, so `mailto:` or `javascript:` links are rejected,
/// since the value ends up in an `href` attribute.
#[derive(Debug, Clone)]
pub struct ShopUrl(String);

impl ShopUrl {
    pub fn parse(s: String) -> Result<Self, String> {
        if !s.validate_url() {
            return Err("shop url is not a valid URL.".to_string());
        }

        let scheme = s.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase());
        match scheme.as_deref() {
            Some("http") | Some("https") => Ok(Self(s)),
            _ => Err("shop url must use the http or https scheme.".to_string()),
        }
    }
}

impl AsRef<str> for ShopUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
