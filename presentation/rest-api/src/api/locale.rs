use business::domain::shared::locale::Locale;
use poem_openapi::payload::Json;

use crate::api::error::ErrorResponse;

/// Parses the optional `locale` query parameter; absent means English.
pub fn parse_locale(raw: Option<String>) -> Result<Locale, Json<ErrorResponse>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(Locale::default()),
        Some(value) => value
            .to_lowercase()
            .parse()
            .map_err(|_| ErrorResponse::validation("locale.unsupported")),
    }
}
