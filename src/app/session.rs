use crate::core::store::JsonFileStore;
use crate::core::{sort_by_salary, SortOrder, Storage, Vacancy, VacancySource};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const YES: &str = "да";
const NO: &str = "нет";

/// Reply to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Invalid,
}

impl Answer {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            YES => Answer::Yes,
            NO => Answer::No,
            _ => Answer::Invalid,
        }
    }
}

/// The first `requested` vacancies of a list, clamped to what is available.
#[derive(Debug)]
pub struct Selection<'a> {
    pub vacancies: &'a [Vacancy],
    pub requested: usize,
}

impl Selection<'_> {
    pub fn is_short(&self) -> bool {
        self.vacancies.len() < self.requested
    }
}

pub fn take_top(vacancies: &[Vacancy], requested: usize) -> Selection<'_> {
    let end = requested.min(vacancies.len());
    Selection {
        vacancies: &vacancies[..end],
        requested,
    }
}

/// Interactive search session: query, show the best paid vacancies, then
/// optionally save, clear and read back the vacancies file.
pub struct Session<R, W, F, S: Storage> {
    input: R,
    output: W,
    source: F,
    store: JsonFileStore<S>,
    default_count: usize,
}

impl<R, W, F, S> Session<R, W, F, S>
where
    R: BufRead,
    W: Write,
    F: VacancySource,
    S: Storage,
{
    pub fn new(input: R, output: W, source: F, store: JsonFileStore<S>, default_count: usize) -> Self {
        Self {
            input,
            output,
            source,
            store,
            default_count,
        }
    }

    /// Runs one full session and returns the fetched vacancies, best paid first.
    pub async fn run(&mut self) -> Result<Vec<Vacancy>> {
        // Search; the query goes out exactly as typed
        let query = self.prompt("Введите поисковой запрос: ")?;
        let mut vacancies = self.source.fetch(&query).await?;
        sort_by_salary(&mut vacancies, SortOrder::Descending);
        tracing::debug!("🔎 {} vacancies for '{}'", vacancies.len(), query);

        // Top N
        let count = self.prompt_count()?;
        self.show(take_top(&vacancies, count))?;

        // Save
        match self.ask("Хотите сохранить файл? Введите \"да\" или \"нет\"!: ")? {
            Answer::Yes => {
                self.store.append(&vacancies).await?;
                tracing::info!("💾 Saved {} vacancies to {}", vacancies.len(), self.store.file_name());
                writeln!(self.output, "Файл сохранён")?;
            }
            Answer::No => writeln!(self.output, "Файл не будет сохранён")?,
            Answer::Invalid => writeln!(self.output, "неверный ввод для сохранения")?,
        }

        // Clear
        match self.ask("Хотите очистить файл? Введите \"да\" или \"нет\"!: ")? {
            Answer::Yes => {
                self.store.clear().await?;
                writeln!(self.output, "Файл чист")?;
            }
            Answer::No => writeln!(self.output, "Файл не будет очищен")?,
            Answer::Invalid => writeln!(self.output, "Неверный ввод для удаления")?,
        }

        // Read back
        match self.ask("Хотите открыть файл? Введите \"да\" или \"нет\"!: ")? {
            Answer::Yes => {
                writeln!(self.output, "Файл открыт")?;
                let count = self.prompt_count()?;
                let saved = self.store.read_all().await?;
                self.show(take_top(&saved, count))?;
            }
            Answer::No => writeln!(self.output, "ок")?,
            Answer::Invalid => writeln!(self.output, "Досвидания!")?,
        }

        self.output.flush()?;
        Ok(vacancies)
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        // EOF reads as an empty line.
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask(&mut self, text: &str) -> Result<Answer> {
        let reply = self.prompt(text)?;
        Ok(Answer::parse(&reply))
    }

    fn prompt_count(&mut self) -> Result<usize> {
        let reply = self.prompt("Введите количество вакансий: ")?;
        match reply.trim().parse::<usize>() {
            Ok(count) => Ok(count),
            Err(_) => {
                writeln!(
                    self.output,
                    "Неверное количество, будет показано {} вакансий",
                    self.default_count
                )?;
                Ok(self.default_count)
            }
        }
    }

    fn show(&mut self, selection: Selection<'_>) -> Result<()> {
        for vacancy in selection.vacancies {
            writeln!(self.output, "{}", vacancy)?;
        }
        if selection.is_short() {
            tracing::debug!(
                "Requested {} vacancies, only {} available",
                selection.requested,
                selection.vacancies.len()
            );
            writeln!(self.output, "Найдено только {} вакансий", selection.vacancies.len())?;
        }
        Ok(())
    }
}
