use crate::domain::model::Vacancy;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn area(&self) -> u32;
    fn per_page(&self) -> u32;
    fn order_by(&self) -> &str;
    fn only_with_salary(&self) -> bool;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn vacancies_file(&self) -> &str;
    fn default_count(&self) -> usize;
}

/// Anything that can answer a free-text vacancy search.
#[async_trait]
pub trait VacancySource: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<Vacancy>>;
}
