use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    entry::application::ports::incoming::use_cases::{
        EditEntryCommand, EditEntryFormError, UpdateEntryError,
    },
    identity::adapter::incoming::web::extractors::auth::CurrentUser,
    identity::application::domain::entities::UserId,
    shared::api::PageResponse,
    shared::render::{render_page, EntryFormPage, Page, TopicView},
    AppState,
};

#[derive(Debug, Deserialize)]
struct EntryForm {
    text: String,
}

#[get("/entries/{entry_id}/edit")]
pub async fn edit_entry_form_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entry_id = path.into_inner();

    // Pre-fill with the stored entry.
    match data.edit_entry_form_use_case.execute(user.user_id, entry_id).await {
        Ok(ctx) => render_page(
            data.renderer.as_ref(),
            &Page::EntryForm(EntryFormPage {
                topic: TopicView::from(&ctx.topic),
                entry_id: Some(ctx.entry.id),
                text: ctx.entry.text.clone(),
                errors: Vec::new(),
                nav_topics: ctx.nav_topics.iter().map(TopicView::from).collect(),
            }),
        ),
        Err(EditEntryFormError::EntryNotFound) => PageResponse::not_found(),
        Err(EditEntryFormError::QueryFailed(_)) => PageResponse::internal_error(),
    }
}

#[post("/entries/{entry_id}/edit")]
pub async fn update_entry_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    form: web::Form<EntryForm>,
) -> impl Responder {
    let owner = user.user_id;
    let entry_id = path.into_inner();
    let form = form.into_inner();

    let command = match EditEntryCommand::new(owner, entry_id, form.text.clone()) {
        Ok(command) => command,
        Err(err) => {
            return render_edit_form(&data, owner, entry_id, form.text, vec![err.to_string()])
                .await;
        }
    };

    match data.update_entry_use_case.execute(command).await {
        Ok(entry) => PageResponse::see_other(&format!("/topics/{}", entry.topic_id)),
        Err(UpdateEntryError::EntryNotFound) => PageResponse::not_found(),
        Err(UpdateEntryError::RepositoryError(_)) => PageResponse::internal_error(),
    }
}

async fn render_edit_form(
    data: &web::Data<AppState>,
    owner: UserId,
    entry_id: Uuid,
    text: String,
    errors: Vec<String>,
) -> HttpResponse {
    // The rejected submission wins over the stored value when re-rendering.
    match data.edit_entry_form_use_case.execute(owner, entry_id).await {
        Ok(ctx) => render_page(
            data.renderer.as_ref(),
            &Page::EntryForm(EntryFormPage {
                topic: TopicView::from(&ctx.topic),
                entry_id: Some(ctx.entry.id),
                text,
                errors,
                nav_topics: ctx.nav_topics.iter().map(TopicView::from).collect(),
            }),
        ),
        Err(EditEntryFormError::EntryNotFound) => PageResponse::not_found(),
        Err(EditEntryFormError::QueryFailed(_)) => PageResponse::internal_error(),
    }
}
