pub mod logs_screen;
pub mod search_screen;

use crate::state::{LogsState, SearchState};

#[derive(Debug, Clone)]
pub enum Screen {
    Search(SearchState),
    Logs(LogsState),
}
