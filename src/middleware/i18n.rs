// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::common::i18n::{DEFAULT_LANG, SUPPORTED_LANGS};

// Extrator de idioma: só o subtag principal ("pt-BR" -> "pt").
#[derive(Debug, Clone, PartialEq)]
pub struct Locale(pub String);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let lang = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .and_then(|header_str| {
                // Em ordem de peso, o primeiro idioma que temos no catálogo (ex: "pt-BR" -> "pt")
                accept_language::parse(header_str)
                    .iter()
                    .map(|tag_string| {
                        tag_string
                            .split('-')
                            .next()
                            .unwrap_or(tag_string)
                            .to_lowercase()
                    })
                    .find(|lang| SUPPORTED_LANGS.contains(&lang.as_str()))
            })
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        Ok(Locale(lang))
    }
}
