pub mod article;
pub mod client;
pub mod config;
pub mod error;
pub mod updater;

pub use article::{Article, ArticleUpdate};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use updater::UpdateService;
