mod html;
mod pages;

pub use html::HtmlPageRenderer;
pub use pages::{
    DashboardPage, EntryFormPage, EntryView, Page, PageRenderer, RenderError, TopicDetailPage,
    TopicFormPage, TopicView, TopicsPage,
};

use actix_web::HttpResponse;

use crate::shared::api::PageResponse;

/// Render a page context into a 200 response.
pub fn render_page(renderer: &dyn PageRenderer, page: &Page) -> HttpResponse {
    match renderer.render(page) {
        Ok(html) => PageResponse::ok(html),
        Err(e) => {
            tracing::error!("Failed to render page: {e}");
            PageResponse::internal_error()
        }
    }
}
