use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};

use crate::AppError;

/// Raw bearer token extracted from the Authorization header.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
}

/// Pull the bearer token out of the Authorization header.
///
/// Missing header, wrong scheme and empty token all collapse to the
/// same `Unauthorized` error.
pub(crate) fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(AppError::unauthorized)?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::unauthorized())?;

    // Parse "Bearer <token>" format
    let parts: Vec<&str> = auth_value.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(AppError::unauthorized());
    }

    let token = parts[1];
    if token.is_empty() {
        return Err(AppError::unauthorized());
    }

    Ok(token.to_string())
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req)?;
            Ok(AuthToken { token })
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::dev::Payload;
    use actix_web::test::TestRequest;
    use actix_web::FromRequest;

    use super::AuthToken;
    use crate::AppError;

    #[actix_web::test]
    async fn extracts_bearer_token() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer abc.def.ghi"))
            .to_http_request();

        let extracted = AuthToken::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(extracted.token, "abc.def.ghi");
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AuthToken::from_request(&req, &mut Payload::None).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[actix_web::test]
    async fn non_bearer_scheme_is_unauthorized() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_http_request();
        let result = AuthToken::from_request(&req, &mut Payload::None).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[actix_web::test]
    async fn bare_scheme_without_token_is_unauthorized() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer"))
            .to_http_request();
        let result = AuthToken::from_request(&req, &mut Payload::None).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
