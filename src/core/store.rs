use crate::core::{Storage, Vacancy};
use crate::utils::error::{AppError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Flat JSON array of vacancies kept in a single file.
pub struct JsonFileStore<S: Storage> {
    storage: S,
    file_name: String,
}

impl<S: Storage> JsonFileStore<S> {
    pub fn new(storage: S, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Appends `vacancies` to whatever array is already stored. Unreadable
    /// existing content is treated as an empty array.
    pub async fn append(&self, vacancies: &[Vacancy]) -> Result<()> {
        let mut entries = self.existing_entries().await;
        let previous = entries.len();

        for vacancy in vacancies {
            entries.push(serde_json::to_value(vacancy)?);
        }

        let data = to_pretty_json(&entries)?;
        self.storage.write_file(&self.file_name, &data).await?;

        tracing::debug!(
            "💾 Appended {} vacancies to {} ({} total)",
            vacancies.len(),
            self.file_name,
            previous + vacancies.len()
        );
        Ok(())
    }

    pub async fn read_all(&self) -> Result<Vec<Vacancy>> {
        let data = self.storage.read_file(&self.file_name).await?;
        if is_blank(&data) {
            return Ok(Vec::new());
        }

        let vacancies: Vec<Vacancy> = serde_json::from_slice(&data)?;
        tracing::debug!("📂 Read {} vacancies from {}", vacancies.len(), self.file_name);
        Ok(vacancies)
    }

    /// Empties the file but leaves it in place.
    pub async fn clear(&self) -> Result<()> {
        self.storage.write_file(&self.file_name, &[]).await?;
        tracing::debug!("🧹 Cleared {}", self.file_name);
        Ok(())
    }

    async fn existing_entries(&self) -> Vec<Value> {
        let data = match self.storage.read_file(&self.file_name).await {
            Ok(data) => data,
            Err(AppError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Vec::new()
            }
            Err(e) => {
                tracing::debug!("Ignoring unreadable {}: {}", self.file_name, e);
                return Vec::new();
            }
        };

        if is_blank(&data) {
            return Vec::new();
        }

        match serde_json::from_slice::<Value>(&data) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                tracing::debug!("Ignoring non-array content in {}", self.file_name);
                Vec::new()
            }
            Err(e) => {
                tracing::debug!("Ignoring malformed {}: {}", self.file_name, e);
                Vec::new()
            }
        }
    }
}

fn is_blank(data: &[u8]) -> bool {
    data.iter().all(u8::is_ascii_whitespace)
}

/// Four-space indented JSON; non-ASCII text is written as-is.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}
