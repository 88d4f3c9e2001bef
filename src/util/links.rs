use tracing::warn;
use url::Url;

pub const DOMAIN: &str = "masterplitkavl.ru";
pub const PHONE_DISPLAY: &str = "+7 951 005-00-02";
pub const PHONE_TEL: &str = "+79510050002";

const WHATSAPP_BASE: &str = "https://wa.me/79510050002";

pub fn tel_url() -> String {
    format!("tel:{PHONE_TEL}")
}

/// WhatsApp chat link, optionally pre-filled with `message`.
pub fn whatsapp_url(message: Option<&str>) -> String {
    let mut url = match Url::parse(WHATSAPP_BASE) {
        Ok(url) => url,
        Err(err) => {
            warn!("WhatsApp base URL rejected: {err}");
            return WHATSAPP_BASE.to_string();
        }
    };

    if let Some(text) = message.filter(|text| !text.trim().is_empty()) {
        url.query_pairs_mut().append_pair("text", text);
    }

    url.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_link_uses_dialable_number() {
        assert_eq!(tel_url(), "tel:+79510050002");
    }

    #[test]
    fn bare_chat_link_has_no_query() {
        assert_eq!(whatsapp_url(None), "https://wa.me/79510050002");
        assert_eq!(whatsapp_url(Some("  ")), "https://wa.me/79510050002");
    }

    #[test]
    fn message_is_percent_encoded() {
        let message = "Здравствуйте! Сумма: ~14\u{a0}478 ₽. Когда & где?";
        let link = whatsapp_url(Some(message));
        assert!(link.starts_with("https://wa.me/79510050002?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('₽'));

        let parsed = Url::parse(&link).unwrap();
        let text = parsed
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned());
        assert_eq!(text.as_deref(), Some(message));
    }
}
