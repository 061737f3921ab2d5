// LinkPad state managers
// Managers own the page's in-memory state: the bookmark collection and the form.

pub mod bookmark_manager;
pub mod page_state;
