pub mod analyzer;
pub mod app;
pub mod cli;
pub mod errors;
pub mod handlers;
pub mod html;
pub mod models;
pub mod nutrition;
pub mod page;
pub mod render;
pub mod report;
pub mod state;
pub mod storage;
pub mod suggest;
pub mod ui;

pub use analyzer::{Analyzer, HttpTransport, Outcome, Transport};
pub use app::router;
pub use errors::{AnalyzeError, AppError};
pub use nutrition::FoodCatalog;
pub use page::Page;
pub use state::AppState;
pub use storage::{load_catalog, resolve_catalog_path};
