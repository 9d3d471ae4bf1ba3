//! DocAI server: HTTP API and command-line front end over the pipeline.

pub mod cli;
pub mod error;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
