//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_entry, health_check, post_convert, post_reload, post_search, post_unknown};
pub use routes::{create_router, run_server};
pub use state::AppState;
