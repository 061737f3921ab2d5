// LinkPad services
// Services hold the page's collaborators: storage, validation, time, settings, and rendering.

pub mod bookmark_store;
pub mod clock;
pub mod local_storage;
pub mod page_renderer;
pub mod settings_engine;
pub mod url_validator;
