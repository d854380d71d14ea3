mod edit_entry;
mod new_entry;

pub use edit_entry::{edit_entry_form_handler, update_entry_handler};
pub use new_entry::{create_entry_handler, new_entry_form_handler};
