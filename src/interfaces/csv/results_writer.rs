use crate::application::comparison::ComparisonRow;
use crate::domain::filter::FilterOutcome;
use crate::domain::recommendation::RecommendationResult;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct FilterRecord<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    fit_status: &'static str,
    fit_reason: &'a str,
    confirmation_minutes: u32,
    popularity_rank: u32,
}

#[derive(Serialize)]
struct RecommendationRecord<'a> {
    rank: usize,
    id: &'a str,
    name: &'a str,
    score: String,
    reason: &'a str,
}

/// Writes engine output as CSV to any `Write` sink (e.g., Stdout, File).
pub struct ResultsWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultsWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// One row per shown method, in engine order.
    pub fn write_filter_outcome(&mut self, outcome: &FilterOutcome<'_>) -> Result<()> {
        for result in &outcome.results {
            self.writer.serialize(FilterRecord {
                id: &result.method.id,
                name: &result.method.name,
                category: result.method.category.as_str(),
                fit_status: if result.fit.is_compatible() {
                    "compatible"
                } else {
                    "incompatible"
                },
                fit_reason: result.fit.reason().unwrap_or_default(),
                confirmation_minutes: result.method.confirmation_minutes,
                popularity_rank: result.method.popularity_rank,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// One row per recommendation. Scores keep two decimals.
    pub fn write_recommendations(&mut self, result: &RecommendationResult<'_>) -> Result<()> {
        for (i, rec) in result.recommendations.iter().enumerate() {
            self.writer.serialize(RecommendationRecord {
                rank: i + 1,
                id: &rec.method.id,
                name: &rec.method.name,
                score: format!("{:.2}", rec.score),
                reason: &rec.reason,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Header row of method names, then one row per comparison label.
    pub fn write_comparison(&mut self, names: &[&str], rows: &[ComparisonRow]) -> Result<()> {
        let mut header = vec![""];
        header.extend_from_slice(names);
        self.writer.write_record(&header)?;
        for row in rows {
            let mut record = vec![row.label];
            record.extend(row.cells.iter().map(String::as_str));
            self.writer.write_record(&record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
