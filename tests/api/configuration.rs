use card_mail::{configuration::get_configuration, domain::OrderNotificationRecord};
use claims::assert_ok;

use crate::helpers::spawn_renderer;

#[test]
fn configured_shop_completes_a_bare_order() {
    let renderer = spawn_renderer();
    let config = get_configuration().expect("Failed to read configuration");
    let record = OrderNotificationRecord {
        name: Some("Premium Key".into()),
        card: Some("ABCD-1234-EFGH".into()),
        ..Default::default()
    };

    let outcome = renderer.render(config.shop.complete(record));

    assert_ok!(&outcome);
    let html = outcome.unwrap();

    assert!(html.contains(&format!(r#"href="{}""#, config.shop.url)));
    assert!(html.contains(&format!(">{}<", config.shop.name)));
}
