pub mod app;
pub mod chrome;
pub mod contact_view;
pub mod palette;
pub mod search_view;
pub mod wizard_view;

pub use app::App;
