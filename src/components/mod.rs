//! UI Components
//!
//! Reusable Leptos components.

mod auth_guard;
mod confirm_modal;
mod error_display;
mod field_error;
mod filters;
mod header;
mod login_form;
mod pagination_bar;
mod register_form;
mod task_modal;
mod task_table;

pub use auth_guard::AuthGuard;
pub use confirm_modal::ConfirmModal;
pub use error_display::ErrorDisplay;
pub use field_error::FieldErrorText;
pub use filters::Filters;
pub use header::Header;
pub use login_form::AuthForm;
pub use pagination_bar::PaginationBar;
pub use register_form::SignUpForm;
pub use task_modal::TaskModal;
pub use task_table::TaskTable;
