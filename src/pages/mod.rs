//! Routed pages

mod home;
mod register;
mod tasks;

pub use home::HomePage;
pub use register::RegisterPage;
pub use tasks::TasksPage;
