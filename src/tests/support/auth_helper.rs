use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{cookie::Key, get, web, HttpResponse};
use std::sync::Arc;

use crate::identity::adapter::outgoing::SessionIdentityProvider;
use crate::identity::application::ports::outgoing::IdentityProvider;

/// Cookie sessions with a throwaway key, wired like production.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_secure(false)
        .build()
}

pub fn identity_provider_data() -> web::Data<Arc<dyn IdentityProvider + Send + Sync>> {
    let provider: Arc<dyn IdentityProvider + Send + Sync> =
        Arc::new(SessionIdentityProvider::default());
    web::Data::new(provider)
}

/// Test-only login endpoint. The external identity service writes the same
/// session value at the end of its real login flow.
#[get("/test/login/{user_id}")]
pub async fn login_as(session: Session, path: web::Path<String>) -> HttpResponse {
    session.insert("user_id", path.into_inner()).unwrap();
    HttpResponse::Ok().finish()
}
