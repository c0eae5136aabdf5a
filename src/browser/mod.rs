//! Repository file browser: view state, fetch sequencing, and the async
//! driver that ties the content service, tree, and editor together.

mod driver;
mod state;

pub use driver::RepositoryBrowser;
pub use state::{
    FetchTicket, FileTreeView, ViewState, EMPTY_CALL_TO_ACTION, EMPTY_TITLE,
    FETCH_ERROR_MESSAGE, LOADING_MESSAGE,
};
