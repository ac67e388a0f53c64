use crate::core::extractor::lookup_or;
use crate::core::{ConfigProvider, SalaryBound, Vacancy, VacancySource};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

const DEFAULT_REQUIREMENT: &str = "Не написали";
const DEFAULT_EXPERIENCE: &str = "**";

/// Client for the hh.ru vacancies search endpoint.
pub struct HhClient {
    client: Client,
    endpoint: String,
    area: u32,
    per_page: u32,
    order_by: String,
    only_with_salary: bool,
}

impl HhClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.api_endpoint().to_string(),
            area: config.area(),
            per_page: config.per_page(),
            order_by: config.order_by().to_string(),
            only_with_salary: config.only_with_salary(),
        })
    }

    fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("text", query.to_string()),
            ("per_page", self.per_page.to_string()),
            ("area", self.area.to_string()),
            ("order_by", self.order_by.clone()),
            ("only_with_salary", self.only_with_salary.to_string()),
        ]
    }
}

#[async_trait]
impl VacancySource for HhClient {
    async fn fetch(&self, query: &str) -> Result<Vec<Vacancy>> {
        tracing::debug!("📡 Searching '{}' at {}", query, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query_params(query))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        if status != StatusCode::OK {
            tracing::warn!("⚠️ Vacancy search failed with status {}", status);
            eprintln!("Ошибка при запросе к API HH: {}", status.as_u16());
            return Ok(Vec::new());
        }

        let body: Value = response.json().await?;
        let vacancies = normalize_items(&body)?;
        tracing::info!("📡 Fetched {} vacancies for '{}'", vacancies.len(), query);
        Ok(vacancies)
    }
}

/// Maps every element of the response `items` array to a [`Vacancy`].
pub fn normalize_items(body: &Value) -> Result<Vec<Vacancy>> {
    let items = body
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::ProcessingError {
            message: "API response has no 'items' array".to_string(),
        })?;

    Ok(items.iter().map(normalize_item).collect())
}

pub fn normalize_item(item: &Value) -> Vacancy {
    let salary = item.get("salary");

    Vacancy::new(
        direct_text(item, "name"),
        direct_text(item, "alternate_url"),
        as_salary_from(&lookup_or("from", salary, 0)),
        as_salary_to(lookup_or("to", salary, "")),
        as_text(lookup_or("currency", salary, "")),
        as_text(lookup_or("requirement", item.get("snippet"), DEFAULT_REQUIREMENT)),
        as_text(lookup_or("name", item.get("experience"), DEFAULT_EXPERIENCE)),
    )
}

fn direct_text(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn as_salary_from(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn as_salary_to(value: Value) -> SalaryBound {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(amount) => SalaryBound::Amount(amount),
            None => n
                .as_f64()
                .map(|f| SalaryBound::Amount(f as i64))
                .unwrap_or_else(|| SalaryBound::Text(n.to_string())),
        },
        other => SalaryBound::Text(as_text(other)),
    }
}

fn as_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
