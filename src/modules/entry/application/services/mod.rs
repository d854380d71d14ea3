mod create_entry_service;
mod edit_entry_form_service;
mod new_entry_form_service;
mod update_entry_service;

pub use create_entry_service::CreateEntryService;
pub use edit_entry_form_service::EditEntryFormService;
pub use new_entry_form_service::NewEntryFormService;
pub use update_entry_service::UpdateEntryService;
