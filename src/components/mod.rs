//! UI Components
//!
//! Leptos components for the tracker page.

mod header;
mod server_status;
mod action_fields;
mod new_action_form;
mod edit_action_form;
mod action_table;
mod delete_confirm_button;

pub use header::{Header, Footer};
pub use server_status::ServerStatus;
pub use action_fields::ActionFields;
pub use new_action_form::NewActionForm;
pub use edit_action_form::EditActionForm;
pub use action_table::ActionTable;
pub use delete_confirm_button::DeleteConfirmButton;
