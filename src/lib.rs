pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::Session;
pub use config::{cli::LocalStorage, AppConfig};
#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use core::{fetcher::HhClient, store::JsonFileStore};
pub use domain::model::{SalaryBound, SortOrder, Vacancy};
pub use utils::error::{AppError, Result};
