use actix_session::SessionExt;
use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::identity::application::domain::entities::UserId;
use crate::identity::application::ports::outgoing::{IdentityError, IdentityProvider};
use crate::shared::api::PageResponse;

/// Session key the external identity service writes at login.
const SESSION_USER_KEY: &str = "user_id";

/// Where unauthenticated requests are sent. The login flow itself belongs
/// to the external identity service.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub login_url: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            login_url: "/login".to_string(),
        }
    }
}

fn create_page_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn login_url(req: &HttpRequest) -> String {
    req.app_data::<web::Data<AuthSettings>>()
        .map(|settings| settings.login_url.clone())
        .unwrap_or_else(|| AuthSettings::default().login_url)
}

enum ResolveError {
    Unconfigured,
    Malformed(String),
}

fn session_identity(req: &HttpRequest) -> Result<Option<UserId>, ResolveError> {
    let provider = req
        .app_data::<web::Data<Arc<dyn IdentityProvider + Send + Sync>>>()
        .ok_or(ResolveError::Unconfigured)?;

    let raw = match req.get_session().get::<String>(SESSION_USER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Ok(None),
        Err(e) => return Err(ResolveError::Malformed(e.to_string())),
    };

    match provider.resolve(&raw) {
        Ok(user_id) => Ok(Some(user_id)),
        Err(IdentityError::Malformed(msg)) => Err(ResolveError::Malformed(msg)),
    }
}

/// Required identity: requests without one are sent to the login page.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
}

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match session_identity(req) {
            Ok(Some(user_id)) => ready(Ok(CurrentUser { user_id })),
            Ok(None) => ready(Err(create_page_error(PageResponse::login_redirect(
                &login_url(req),
            )))),
            // A stale or garbled session cookie: ask the user to log in again.
            Err(ResolveError::Malformed(_)) => ready(Err(create_page_error(
                PageResponse::login_redirect(&login_url(req)),
            ))),
            Err(ResolveError::Unconfigured) => {
                ready(Err(create_page_error(PageResponse::internal_error())))
            }
        }
    }
}

/// Optional identity for public pages.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<UserId>);

impl FromRequest for MaybeUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match session_identity(req) {
            Ok(user) => ready(Ok(MaybeUser(user))),
            Err(ResolveError::Malformed(msg)) => {
                tracing::warn!("malformed session identity, serving as anonymous: {msg}");
                ready(Ok(MaybeUser(None)))
            }
            Err(ResolveError::Unconfigured) => {
                ready(Err(create_page_error(PageResponse::internal_error())))
            }
        }
    }
}
