use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    entry::application::ports::incoming::use_cases::{
        CreateEntryError, NewEntryCommand, NewEntryFormError,
    },
    identity::adapter::incoming::web::extractors::auth::CurrentUser,
    identity::application::domain::entities::UserId,
    shared::api::PageResponse,
    shared::render::{render_page, EntryFormPage, Page, TopicView},
    AppState,
};

/// Only `text` is read from the submission; the topic binding comes from
/// the path, never from the payload.
#[derive(Debug, Deserialize)]
struct EntryForm {
    text: String,
}

#[get("/topics/{topic_id}/entries/new")]
pub async fn new_entry_form_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    render_entry_form(&data, user.user_id, path.into_inner(), String::new(), Vec::new()).await
}

#[post("/topics/{topic_id}/entries/new")]
pub async fn create_entry_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    form: web::Form<EntryForm>,
) -> impl Responder {
    let owner = user.user_id;
    let topic_id = path.into_inner();
    let form = form.into_inner();

    let command = match NewEntryCommand::new(owner, topic_id, form.text.clone()) {
        Ok(command) => command,
        Err(err) => {
            return render_entry_form(&data, owner, topic_id, form.text, vec![err.to_string()])
                .await;
        }
    };

    match data.create_entry_use_case.execute(command).await {
        Ok(entry) => PageResponse::see_other(&format!("/topics/{}", entry.topic_id)),
        Err(CreateEntryError::TopicNotFound) => PageResponse::not_found(),
        Err(CreateEntryError::RepositoryError(_)) => PageResponse::internal_error(),
    }
}

async fn render_entry_form(
    data: &web::Data<AppState>,
    owner: UserId,
    topic_id: Uuid,
    text: String,
    errors: Vec<String>,
) -> HttpResponse {
    match data.new_entry_form_use_case.execute(owner, topic_id).await {
        Ok(ctx) => render_page(
            data.renderer.as_ref(),
            &Page::EntryForm(EntryFormPage {
                topic: TopicView::from(&ctx.topic),
                entry_id: None,
                text,
                errors,
                nav_topics: ctx.nav_topics.iter().map(TopicView::from).collect(),
            }),
        ),
        Err(NewEntryFormError::TopicNotFound) => PageResponse::not_found(),
        Err(NewEntryFormError::QueryFailed(_)) => PageResponse::internal_error(),
    }
}
