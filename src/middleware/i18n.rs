// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::{DEFAULT_LANG, SUPPORTED_LANGS};

// Nosso extrator de idioma
#[derive(Debug, Clone)]
pub struct Locale(pub String);

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LANG.to_string())
    }
}

impl Locale {
    /// Escolhe o primeiro idioma suportado do `Accept-Language`.
    pub fn from_header(value: Option<&str>) -> Self {
        value
            .map(accept_language::parse)
            .unwrap_or_default()
            .iter()
            // "es-UY" -> "es"
            .filter_map(|tag| tag.split('-').next())
            .map(|lang| lang.to_lowercase())
            .find(|lang| SUPPORTED_LANGS.contains(&lang.as_str()))
            .map(Locale)
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        Ok(Locale::from_header(header_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_supported_language() {
        assert_eq!(Locale::from_header(Some("fr-FR, en;q=0.8, es;q=0.5")).0, "en");
        assert_eq!(Locale::from_header(Some("pt")).0, "pt");
    }

    #[test]
    fn defaults_to_spanish() {
        assert_eq!(Locale::from_header(None).0, "es");
        assert_eq!(Locale::from_header(Some("de-DE")).0, "es");
    }
}
