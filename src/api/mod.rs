mod api_error;
mod routes;
mod server;

pub use server::{AppState, run_server};
