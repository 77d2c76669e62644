use std::io::{Read, Write};

use anyhow::Context;
use card_mail::{
    card_mail::CardMailRenderer,
    configuration::get_configuration,
    domain::OrderNotificationRecord,
    telemetry::{get_subscriber, init_subscriber},
};

fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("card_mail".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let plain_text = std::env::args().skip(1).any(|arg| arg == "--text");

    let outcome = run(plain_text);
    if let Err(e) = &outcome {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Card mail was not rendered"
        );
    }
    outcome
}

fn run(plain_text: bool) -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read the order record from stdin.")?;
    let record: OrderNotificationRecord =
        serde_json::from_str(&input).context("Failed to parse the order record as JSON.")?;
    let record = config.shop.complete(record);

    let renderer = CardMailRenderer::new().context("Failed to build card mail templates.")?;
    let output = if plain_text {
        renderer.render_text(record)
    } else {
        renderer.render(record)
    }
    .context("Failed to render the card mail.")?;

    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("Failed to write the card mail to stdout.")?;

    tracing::info!("Card mail rendered");
    Ok(())
}
