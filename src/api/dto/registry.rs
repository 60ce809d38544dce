//! HTTP rendering of [`RegistryResponse`].
//!
//! The status, headers and raw body of the core response are passed through
//! unchanged; no JSON wrapper is added around the body.

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::domain::entities::RegistryResponse;

impl IntoResponse for RegistryResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Dropping header that is not valid HTTP"),
            }
        }

        (status, headers, self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Action;
    use crate::error::RequestError;
    use axum::http::header::CONTENT_TYPE;

    #[test]
    fn test_created_renders_status_and_headers() {
        let response = RegistryResponse::created(&Action::Create, "ab12XY").into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(response.headers()["upload_authorized"], "true");
    }

    #[test]
    fn test_bad_gateway_status_for_validation() {
        let response = RegistryResponse::rejected(
            &Action::Create,
            &RequestError::from(crate::error::ValidationError::MissingUrl),
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_forbidden_has_single_header() {
        let response =
            RegistryResponse::rejected(&Action::Create, &RequestError::Forbidden).into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get("upload_authorized").is_none());
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }
}
