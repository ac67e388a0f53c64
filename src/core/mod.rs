pub mod extractor;
pub mod fetcher;
pub mod store;

pub use crate::domain::model::{sort_by_salary, Currency, SalaryBound, SortOrder, Vacancy};
pub use crate::domain::ports::{ConfigProvider, Storage, VacancySource};
pub use crate::utils::error::Result;
