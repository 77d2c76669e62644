mod card_secret;
mod order_notification;
mod product_name;
mod shop_name;
mod shop_url;

pub use card_secret::CardSecret;
pub use order_notification::{
    NotificationField, OrderNotification, OrderNotificationRecord, RecordError,
};
pub use product_name::ProductName;
pub use shop_name::ShopName;
pub use shop_url::ShopUrl;
