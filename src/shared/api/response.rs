// src/shared/api/response.rs
use actix_web::{http::header, HttpResponse};

/// Response helpers for the server-rendered surface.
pub struct PageResponse;

impl PageResponse {
    pub fn ok(html: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)
    }

    /// Post/redirect/get after a successful submission.
    pub fn see_other(location: &str) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    /// Sends an unauthenticated request to the login page.
    pub fn login_redirect(login_url: &str) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, login_url))
            .finish()
    }

    /// Absent resources and resources owned by someone else both land here.
    pub fn not_found() -> HttpResponse {
        HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body("<!DOCTYPE html><html><body><h1>Not Found</h1></body></html>")
    }

    pub fn internal_error() -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("text/html; charset=utf-8")
            .body("<!DOCTYPE html><html><body><h1>Something went wrong</h1></body></html>")
    }
}
