use axum::async_trait;
use axum::extract::FromRequest;
use axum::body::HttpBody;
use axum::http::Request;
use axum::{BoxError, Form};
use std::convert::Infallible;
use tracing::debug;

/// Url-encoded form fields in posted order, extracted without ever rejecting
/// the request. A body that is missing, not url-encoded or unreadable yields
/// an empty form. Repeated keys resolve to their first value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn get(&self, name: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

#[async_trait]
impl<S, B> FromRequest<S, B> for FormFields
where
    S: Send + Sync,
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    type Rejection = Infallible;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(fields)) => Ok(Self(fields)),
            Err(rejection) => {
                debug!("Treating unreadable form submission as empty: {}", rejection);
                Ok(Self::default())
            }
        }
    }
}
