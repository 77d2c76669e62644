use crate::domain::OrderNotificationRecord;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub shop: ShopSettings,
}

/// The storefront's `web_name` / `web_url` system settings.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct ShopSettings {
    pub name: String,
    pub url: String,
}

impl ShopSettings {
    /// Fills in the shop fields a record leaves out. Fields the record carries win.
    pub fn complete(&self, record: OrderNotificationRecord) -> OrderNotificationRecord {
        OrderNotificationRecord {
            web_url: record.web_url.or_else(|| Some(self.url.clone())),
            web_name: record.web_name.or_else(|| Some(self.name.clone())),
            ..record
        }
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let settings = config::Config::builder()
        .add_source(config::File::with_name(&conf_dir.join("base").to_string_lossy()).required(true))
        .add_source(
            config::File::with_name(&conf_dir.join(env.as_str()).to_string_lossy()).required(true),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
