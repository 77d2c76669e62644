pub mod card_mail;
pub mod configuration;
pub mod domain;
pub mod helpers;
pub mod telemetry;
