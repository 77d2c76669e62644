mod configuration;
mod errors;
