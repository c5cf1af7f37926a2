//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod edit;
pub mod mutation;
pub mod pagination;
pub mod search;
pub mod search_input_handler;
pub mod selection;
pub mod store;
pub mod table;
pub mod table_handler;

// Re-export for convenience
pub use app_state::{AppState, FetchStatus, FocusPane};
pub use mutation::{ConfirmPolicy, PendingDelete};
pub use pagination::{PageNav, Pagination, DEFAULT_PAGE_SIZE};
pub use search::SearchQuery;
pub use search_input_handler::SearchInput;
pub use selection::SelectionSet;
pub use store::{LoadReport, RecordStore};
pub use table::{Outcome, RowView, TableAction, TableState, TableView};
pub use table_handler::handle_table_action;
