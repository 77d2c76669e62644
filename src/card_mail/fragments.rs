/// Fixed markup around the per-order content. `header` ends inside the body
/// cell, `footer_pre_link` ends inside the shop link cell and
/// `footer_post_link` closes everything through `</html>`.
///
/// Mail-merge tokens such as `*|MC:SUBJECT|*` are left for the mailing
/// platform and must not be touched here.
#[derive(Debug, Clone, Copy)]
pub struct Fragments {
    pub header: &'static str,
    pub footer_pre_link: &'static str,
    pub footer_post_link: &'static str,
}

impl Fragments {
    pub const CARD_DELIVERY: Self = Self {
        header: include_str!("../../views/card_mail/header.html"),
        footer_pre_link: include_str!("../../views/card_mail/footer_pre_link.html"),
        footer_post_link: include_str!("../../views/card_mail/footer_post_link.html"),
    };

    pub(super) fn len(&self) -> usize {
        self.header.len() + self.footer_pre_link.len() + self.footer_post_link.len()
    }
}

impl Default for Fragments {
    fn default() -> Self {
        Self::CARD_DELIVERY
    }
}
