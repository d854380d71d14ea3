mod create_entry_use_case;
mod edit_entry_form_use_case;
mod new_entry_form_use_case;
mod update_entry_use_case;

pub use create_entry_use_case::{
    CreateEntryError, CreateEntryUseCase, EntryFormError, NewEntryCommand,
};
pub use edit_entry_form_use_case::{
    EditEntryFormData, EditEntryFormError, EditEntryFormUseCase,
};
pub use new_entry_form_use_case::{NewEntryFormData, NewEntryFormError, NewEntryFormUseCase};
pub use update_entry_use_case::{EditEntryCommand, UpdateEntryError, UpdateEntryUseCase};
