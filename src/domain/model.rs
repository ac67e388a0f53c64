use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Upper salary bound. The API reports a number, while placeholder values and
/// older files may carry a string instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SalaryBound {
    Amount(i64),
    Text(String),
}

/// Every shape a stored `salary_to` may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSalaryBound {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for SalaryBound {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match StoredSalaryBound::deserialize(deserializer)? {
            StoredSalaryBound::Integer(amount) => SalaryBound::Amount(amount),
            // truncated, same as amounts coming from the API
            StoredSalaryBound::Float(amount) => SalaryBound::Amount(amount as i64),
            StoredSalaryBound::Text(text) => SalaryBound::Text(text),
        })
    }
}

impl Default for SalaryBound {
    fn default() -> Self {
        SalaryBound::Text(String::new())
    }
}

impl fmt::Display for SalaryBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalaryBound::Amount(value) => write!(f, "{}", value),
            SalaryBound::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    Rur,
    Eur,
    Usd,
    Other(String),
}

impl Currency {
    pub fn from_code(code: &str) -> Self {
        match code {
            "RUR" => Currency::Rur,
            "EUR" => Currency::Eur,
            "USD" => Currency::Usd,
            other => Currency::Other(other.to_string()),
        }
    }

    /// Label printed after the salary range. Unknown codes have no label.
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Rur => "рублей.",
            Currency::Eur => "евро.",
            Currency::Usd => "долларов США.",
            Currency::Other(_) => "",
        }
    }
}

/// One normalized job posting.
///
/// Field names on the wire match the vacancies file format:
/// `name, salary_from, salary_to, currency, requirement, experience, alternate_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    #[serde(rename = "name")]
    title: String,
    salary_from: i64,
    salary_to: SalaryBound,
    currency: String,
    requirement: String,
    experience: String,
    #[serde(rename = "alternate_url")]
    url: String,
}

impl Vacancy {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        salary_from: i64,
        salary_to: SalaryBound,
        currency: impl Into<String>,
        requirement: impl Into<String>,
        experience: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            salary_from,
            salary_to,
            currency: currency.into(),
            requirement: requirement.into(),
            experience: experience.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn salary_from(&self) -> i64 {
        self.salary_from
    }

    pub fn salary_to(&self) -> &SalaryBound {
        &self.salary_to
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    pub fn experience(&self) -> &str {
        &self.experience
    }

    /// Orders by minimum salary only.
    pub fn cmp_salary(&self, other: &Self) -> Ordering {
        self.salary_from.cmp(&other.salary_from)
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Профессия: {}, заработная плата: {} - {} {} Опыт работы: {}",
            self.title,
            self.salary_from,
            self.salary_to,
            Currency::from_code(&self.currency).label(),
            self.experience.to_lowercase()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Stable sort on `salary_from`; vacancies with equal salary keep their input order.
pub fn sort_by_salary(vacancies: &mut [Vacancy], order: SortOrder) {
    match order {
        SortOrder::Ascending => vacancies.sort_by(|a, b| a.cmp_salary(b)),
        SortOrder::Descending => vacancies.sort_by(|a, b| b.cmp_salary(a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vacancy(title: &str, salary_from: i64, currency: &str) -> Vacancy {
        Vacancy::new(
            title,
            format!("https://hh.ru/vacancy/{}", salary_from),
            salary_from,
            SalaryBound::Amount(salary_from * 2),
            currency,
            "Опыт работы с Python",
            "От 1 года до 3 лет",
        )
    }

    #[test]
    fn test_display_known_currency() {
        let v = vacancy("Python developer", 100000, "RUR");
        assert_eq!(
            v.to_string(),
            "Профессия: Python developer, заработная плата: 100000 - 200000 рублей. Опыт работы: от 1 года до 3 лет"
        );
    }

    #[test]
    fn test_display_unknown_currency_has_empty_label() {
        let v = Vacancy::new(
            "Analyst",
            "https://hh.ru/vacancy/1",
            500,
            SalaryBound::default(),
            "KZT",
            "Не написали",
            "**",
        );
        assert_eq!(
            v.to_string(),
            "Профессия: Analyst, заработная плата: 500 -   Опыт работы: **"
        );
    }

    #[test]
    fn test_currency_labels() {
        assert_eq!(Currency::from_code("EUR").label(), "евро.");
        assert_eq!(Currency::from_code("USD").label(), "долларов США.");
        assert_eq!(Currency::from_code("BYR"), Currency::Other("BYR".to_string()));
    }

    #[test]
    fn test_sort_descending_is_non_increasing() {
        let mut list = vec![
            vacancy("a", 50, "RUR"),
            vacancy("b", 300, "RUR"),
            vacancy("c", 0, "RUR"),
            vacancy("d", 300, "USD"),
            vacancy("e", 120, "EUR"),
        ];
        sort_by_salary(&mut list, SortOrder::Descending);

        let salaries: Vec<i64> = list.iter().map(Vacancy::salary_from).collect();
        assert!(salaries.windows(2).all(|w| w[0] >= w[1]));
        // equal salaries keep input order
        assert_eq!(list[0].title(), "b");
        assert_eq!(list[1].title(), "d");
    }

    #[test]
    fn test_sort_ascending() {
        let mut list = vec![vacancy("a", 30, "RUR"), vacancy("b", 10, "RUR")];
        sort_by_salary(&mut list, SortOrder::Ascending);
        assert_eq!(list[0].salary_from(), 10);
    }

    #[test]
    fn test_json_mapping_uses_file_field_names() {
        let v = vacancy("Rust developer", 250000, "RUR");
        let json = serde_json::to_value(&v).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 7);
        assert_eq!(obj["name"], "Rust developer");
        assert_eq!(obj["alternate_url"], "https://hh.ru/vacancy/250000");
        assert_eq!(obj["salary_from"], 250000);
        assert_eq!(obj["salary_to"], 500000);
        assert_eq!(obj["currency"], "RUR");
    }

    #[test]
    fn test_salary_to_accepts_every_stored_shape() {
        let parse = |raw: &str| serde_json::from_str::<SalaryBound>(raw).unwrap();

        assert_eq!(parse("5000"), SalaryBound::Amount(5000));
        assert_eq!(parse("5000.0"), SalaryBound::Amount(5000));
        assert_eq!(parse("4999.9"), SalaryBound::Amount(4999));
        assert_eq!(parse("\"\""), SalaryBound::Text(String::new()));
        assert!(serde_json::from_str::<SalaryBound>("null").is_err());
    }

    #[test]
    fn test_json_round_trip_is_stable() {
        let v = Vacancy::new("QA", "u", 0, SalaryBound::Text(String::new()), "", "Не написали", "**");
        let first = serde_json::to_value(&v).unwrap();
        let restored: Vacancy = serde_json::from_value(first.clone()).unwrap();
        assert_eq!(restored, v);
        assert_eq!(serde_json::to_value(&restored).unwrap(), first);
    }
}
