use tera::{Context, Tera};

use crate::domain::{OrderNotification, OrderNotificationRecord};

use super::{RenderError, escape::html_entities, fragments::Fragments};

const BODY_TEMPLATE: &str = "card_mail/body.html";
const SHOP_LINK_TEMPLATE: &str = "card_mail/shop_link.html";
const PLAIN_TEMPLATE: &str = "card_mail/plain.txt";

/// Both bodies of a card delivery email, ready for a mail client.
#[derive(Debug, Clone)]
pub struct CardMailContent {
    pub html: String,
    pub text: String,
}

/// Builds card delivery emails. Construct once and share; rendering only reads
/// the fixed fragments and the compiled templates.
pub struct CardMailRenderer {
    fragments: Fragments,
    templates: Tera,
}

impl CardMailRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut templates = Tera::default();
        templates.autoescape_on(vec![]);
        templates.register_filter("html_entities", html_entities);
        templates.add_raw_templates(vec![
            (BODY_TEMPLATE, include_str!("../../views/card_mail/body.html")),
            (
                SHOP_LINK_TEMPLATE,
                include_str!("../../views/card_mail/shop_link.html"),
            ),
            (PLAIN_TEMPLATE, include_str!("../../views/card_mail/plain.txt")),
        ])?;

        Ok(Self {
            fragments: Fragments::CARD_DELIVERY,
            templates,
        })
    }

    #[tracing::instrument(
        name = "Rendering a card delivery email.",
        skip(self, record),
        fields(product_name = ?record.name)
    )]
    pub fn render(&self, record: OrderNotificationRecord) -> Result<String, RenderError> {
        let notification = OrderNotification::try_from(record)?;
        self.render_notification(&notification)
    }

    pub fn render_notification(
        &self,
        notification: &OrderNotification,
    ) -> Result<String, RenderError> {
        let ctx = template_context(notification);
        let body = self.templates.render(BODY_TEMPLATE, &ctx)?;
        let shop_link = self.templates.render(SHOP_LINK_TEMPLATE, &ctx)?;

        let mut html = String::with_capacity(self.fragments.len() + body.len() + shop_link.len());
        html.push_str(self.fragments.header);
        html.push_str(&body);
        html.push_str(self.fragments.footer_pre_link);
        html.push_str(&shop_link);
        html.push_str(self.fragments.footer_post_link);

        Ok(html)
    }

    #[tracing::instrument(
        name = "Rendering a plain text card delivery email.",
        skip(self, record),
        fields(product_name = ?record.name)
    )]
    pub fn render_text(&self, record: OrderNotificationRecord) -> Result<String, RenderError> {
        let notification = OrderNotification::try_from(record)?;
        self.render_notification_text(&notification)
    }

    pub fn render_notification_text(
        &self,
        notification: &OrderNotification,
    ) -> Result<String, RenderError> {
        let ctx = template_context(notification);
        Ok(self.templates.render(PLAIN_TEMPLATE, &ctx)?)
    }

    pub fn render_email(
        &self,
        record: OrderNotificationRecord,
    ) -> Result<CardMailContent, RenderError> {
        let notification = OrderNotification::try_from(record)?;
        tracing::debug!(
            product_name = %notification.name.as_ref(),
            "Rendering html and text bodies."
        );

        Ok(CardMailContent {
            html: self.render_notification(&notification)?,
            text: self.render_notification_text(&notification)?,
        })
    }
}

fn template_context(notification: &OrderNotification) -> Context {
    let mut ctx = Context::new();
    ctx.insert("name", notification.name.as_ref());
    ctx.insert("card_codes", &notification.card.codes());
    ctx.insert("web_url", notification.web_url.as_ref());
    ctx.insert("web_name", notification.web_name.as_ref());
    ctx
}
