use super::period::{Period, PeriodParseError};
use super::record::{CompanyEsgRecord, Scorecard};
use crate::scoring::Standard;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read report export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid report CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    Period {
        row: usize,
        #[source]
        source: PeriodParseError,
    },
    #[error("row {row}: ESRS scores must be all present or all blank")]
    PartialEsrs { row: usize },
}

/// Reads report rows from CSV. Grades are never read from the file; they are
/// derived from the clamped scores.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<CompanyEsgRecord>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<ReportRow>().enumerate() {
        let row = row?;
        let line = index + 2;
        records.push(row.into_record(line)?);
    }

    debug!(records = records.len(), "imported report rows");
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ReportRow {
    id: String,
    company_name: String,
    period: String,
    overall_score: f64,
    e_score: f64,
    s_score: f64,
    g_score: f64,
    #[serde(default, deserialize_with = "blank_as_none")]
    esrs_overall_score: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    esrs_e_score: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    esrs_s_score: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    esrs_g_score: Option<f64>,
}

impl ReportRow {
    fn into_record(self, row: usize) -> Result<CompanyEsgRecord, ImportError> {
        let period: Period = self
            .period
            .parse()
            .map_err(|source| ImportError::Period { row, source })?;
        let k_esg = Scorecard::new(self.overall_score, self.e_score, self.s_score, self.g_score);
        let record = CompanyEsgRecord::new(self.id, self.company_name, period, k_esg);

        match (
            self.esrs_overall_score,
            self.esrs_e_score,
            self.esrs_s_score,
            self.esrs_g_score,
        ) {
            (Some(overall), Some(e), Some(s), Some(g)) => {
                Ok(record.with_scorecard(Standard::Esrs, Scorecard::new(overall, e, s, g)))
            }
            (None, None, None, None) => Ok(record),
            _ => Err(ImportError::PartialEsrs { row }),
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
