use std::fmt::{Debug, Display};

use super::{CardSecret, ProductName, ShopName, ShopUrl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationField {
    Name,
    Card,
    WebUrl,
    WebName,
}

impl NotificationField {
    pub fn key(&self) -> &'static str {
        match self {
            NotificationField::Name => "name",
            NotificationField::Card => "card",
            NotificationField::WebUrl => "web_url",
            NotificationField::WebName => "web_name",
        }
    }
}

impl Display for NotificationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Missing required field `{0}`.")]
    MissingField(NotificationField),
    #[error("Invalid value for field `{field}`: {reason}")]
    InvalidField {
        field: NotificationField,
        reason: String,
    },
}

/// Order data as handed over by the order pipeline. Any key may be absent.
#[derive(serde::Deserialize, Clone, Default)]
pub struct OrderNotificationRecord {
    pub name: Option<String>,
    pub card: Option<String>,
    pub web_url: Option<String>,
    pub web_name: Option<String>,
}

impl OrderNotificationRecord {
    pub fn new(
        name: impl Into<String>,
        card: impl Into<String>,
        web_url: impl Into<String>,
        web_name: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            card: Some(card.into()),
            web_url: Some(web_url.into()),
            web_name: Some(web_name.into()),
        }
    }
}

impl Debug for OrderNotificationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderNotificationRecord")
            .field("name", &self.name)
            .field("card", &self.card.as_ref().map(|_| "[REDACTED]"))
            .field("web_url", &self.web_url)
            .field("web_name", &self.web_name)
            .finish()
    }
}

#[derive(Debug)]
pub struct OrderNotification {
    pub name: ProductName,
    pub card: CardSecret,
    pub web_url: ShopUrl,
    pub web_name: ShopName,
}

fn required(value: Option<String>, field: NotificationField) -> Result<String, RecordError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(RecordError::MissingField(field))
}

fn parse_field<T>(
    value: Option<String>,
    field: NotificationField,
    parse: impl FnOnce(String) -> Result<T, String>,
) -> Result<T, RecordError> {
    let value = required(value, field)?;
    parse(value).map_err(|reason| RecordError::InvalidField { field, reason })
}

impl TryFrom<OrderNotificationRecord> for OrderNotification {
    type Error = RecordError;

    fn try_from(record: OrderNotificationRecord) -> Result<Self, Self::Error> {
        let name = parse_field(record.name, NotificationField::Name, ProductName::parse)?;
        let card = parse_field(record.card, NotificationField::Card, CardSecret::parse)?;
        let web_url = parse_field(record.web_url, NotificationField::WebUrl, ShopUrl::parse)?;
        let web_name = parse_field(record.web_name, NotificationField::WebName, ShopName::parse)?;

        Ok(Self {
            name,
            card,
            web_url,
            web_name,
        })
    }
}
