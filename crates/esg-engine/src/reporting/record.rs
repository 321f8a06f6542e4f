use super::period::Period;
use crate::scoring::{grade, Category, Grade, Standard};
use serde::{Deserialize, Serialize};

/// A score paired with the grade derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub score: f64,
    pub grade: Grade,
}

impl ScoreEntry {
    fn clamped(score: f64) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 100.0)
        };
        Self {
            score,
            grade: grade(score),
        }
    }
}

/// One standard's overall and E/S/G scores. Scores are clamped to `[0, 100]`
/// and grades are always derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawScores", into = "ScorecardView")]
pub struct Scorecard {
    overall: ScoreEntry,
    environmental: ScoreEntry,
    social: ScoreEntry,
    governance: ScoreEntry,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawScores {
    overall_score: f64,
    e_score: f64,
    s_score: f64,
    g_score: f64,
}

impl From<RawScores> for Scorecard {
    fn from(raw: RawScores) -> Self {
        Scorecard::new(raw.overall_score, raw.e_score, raw.s_score, raw.g_score)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScorecardView {
    pub overall_score: f64,
    pub overall_grade: Grade,
    pub e_score: f64,
    pub e_grade: Grade,
    pub s_score: f64,
    pub s_grade: Grade,
    pub g_score: f64,
    pub g_grade: Grade,
}

impl From<Scorecard> for ScorecardView {
    fn from(card: Scorecard) -> Self {
        Self {
            overall_score: card.overall.score,
            overall_grade: card.overall.grade,
            e_score: card.environmental.score,
            e_grade: card.environmental.grade,
            s_score: card.social.score,
            s_grade: card.social.grade,
            g_score: card.governance.score,
            g_grade: card.governance.grade,
        }
    }
}

impl Scorecard {
    pub fn new(overall: f64, environmental: f64, social: f64, governance: f64) -> Self {
        Self {
            overall: ScoreEntry::clamped(overall),
            environmental: ScoreEntry::clamped(environmental),
            social: ScoreEntry::clamped(social),
            governance: ScoreEntry::clamped(governance),
        }
    }

    pub fn overall(&self) -> ScoreEntry {
        self.overall
    }

    pub fn environmental(&self) -> ScoreEntry {
        self.environmental
    }

    pub fn social(&self) -> ScoreEntry {
        self.social
    }

    pub fn governance(&self) -> ScoreEntry {
        self.governance
    }

    pub fn category(&self, category: Category) -> ScoreEntry {
        match category {
            Category::E => self.environmental,
            Category::S => self.social,
            Category::G => self.governance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardScorecard {
    pub standard: Standard,
    pub scorecard: Scorecard,
}

/// One reporting period's snapshot for a company, scored under K-ESG and
/// optionally ESRS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct CompanyEsgRecord {
    pub id: String,
    pub company_name: String,
    pub period: Period,
    scorecards: Vec<StandardScorecard>,
}

#[derive(Deserialize)]
struct RawRecord {
    id: String,
    company_name: String,
    period: Period,
    scorecards: Vec<StandardScorecard>,
}

impl TryFrom<RawRecord> for CompanyEsgRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let (primary, others): (Vec<StandardScorecard>, Vec<StandardScorecard>) = raw
            .scorecards
            .into_iter()
            .partition(|entry| entry.standard == Standard::KEsg);
        let primary = primary
            .last()
            .ok_or_else(|| format!("record {} is missing its K-ESG scorecard", raw.id))?;

        let record = CompanyEsgRecord::new(raw.id, raw.company_name, raw.period, primary.scorecard);
        Ok(others.into_iter().fold(record, |record, entry| {
            record.with_scorecard(entry.standard, entry.scorecard)
        }))
    }
}

impl CompanyEsgRecord {
    pub fn new(
        id: impl Into<String>,
        company_name: impl Into<String>,
        period: Period,
        k_esg: Scorecard,
    ) -> Self {
        Self {
            id: id.into(),
            company_name: company_name.into(),
            period,
            scorecards: vec![StandardScorecard {
                standard: Standard::KEsg,
                scorecard: k_esg,
            }],
        }
    }

    /// Adds or replaces the scorecard for `standard`.
    pub fn with_scorecard(mut self, standard: Standard, scorecard: Scorecard) -> Self {
        match self
            .scorecards
            .iter_mut()
            .find(|entry| entry.standard == standard)
        {
            Some(entry) => entry.scorecard = scorecard,
            None => self.scorecards.push(StandardScorecard {
                standard,
                scorecard,
            }),
        }
        self
    }

    pub fn has_scorecard(&self, standard: Standard) -> bool {
        self.scorecards
            .iter()
            .any(|entry| entry.standard == standard)
    }

    /// Scores under `standard`, falling back to K-ESG when the record has no
    /// scorecard for it.
    pub fn scorecard(&self, standard: Standard) -> &Scorecard {
        let primary = &self.scorecards[0].scorecard;
        self.scorecards
            .iter()
            .find(|entry| entry.standard == standard)
            .map(|entry| &entry.scorecard)
            .unwrap_or(primary)
    }

    pub fn scorecards(&self) -> &[StandardScorecard] {
        &self.scorecards
    }

    pub fn view(&self, standard: Standard) -> ReportRowView {
        let card = self.scorecard(standard);
        ReportRowView {
            id: self.id.clone(),
            company_name: self.company_name.clone(),
            period: self.period,
            standard,
            overall: ScoreCell::from(card.overall()),
            environmental: ScoreCell::from(card.environmental()),
            social: ScoreCell::from(card.social()),
            governance: ScoreCell::from(card.governance()),
        }
    }
}

/// Display score rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCell {
    pub score: f64,
    pub grade: Grade,
}

impl From<ScoreEntry> for ScoreCell {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            score: (entry.score * 10.0).round() / 10.0,
            grade: entry.grade,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRowView {
    pub id: String,
    pub company_name: String,
    pub period: Period,
    pub standard: Standard,
    pub overall: ScoreCell,
    pub environmental: ScoreCell,
    pub social: ScoreCell,
    pub governance: ScoreCell,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period() -> Period {
        Period::new(2025, 6).expect("valid period")
    }

    #[test]
    fn scores_are_clamped_and_graded_on_creation() {
        let card = Scorecard::new(104.0, -3.0, 85.0, f64::NAN);
        assert_eq!(card.overall().score, 100.0);
        assert_eq!(card.overall().grade, Grade::APlus);
        assert_eq!(card.environmental().score, 0.0);
        assert_eq!(card.social().grade, Grade::A);
        assert_eq!(card.governance().grade, Grade::F);
    }

    #[test]
    fn missing_standard_falls_back_to_k_esg() {
        let record = CompanyEsgRecord::new("r1", "Acme", period(), Scorecard::new(80.0, 81.0, 79.0, 80.0));
        assert!(!record.has_scorecard(Standard::Esrs));
        assert_eq!(record.scorecard(Standard::Esrs), record.scorecard(Standard::KEsg));

        let record = record.with_scorecard(Standard::Esrs, Scorecard::new(70.0, 71.0, 69.0, 70.0));
        assert_eq!(record.scorecard(Standard::Esrs).overall().grade, Grade::CPlus);
        assert_eq!(record.scorecard(Standard::KEsg).overall().grade, Grade::BPlus);
    }

    #[test]
    fn row_view_rounds_to_one_decimal() {
        let record = CompanyEsgRecord::new("r1", "Acme", period(), Scorecard::new(77.46, 80.04, 70.05, 60.0));
        let row = record.view(Standard::KEsg);
        assert_eq!(row.overall.score, 77.5);
        assert_eq!(row.environmental.score, 80.0);
        assert_eq!(row.overall.grade, Grade::B);
    }

    #[test]
    fn deserialization_recomputes_grades() {
        let json = r#"{
            "id": "r7",
            "company_name": "Acme",
            "period": "2024-11",
            "scorecards": [
                {"standard": "ESRS", "scorecard": {"overall_score": 50, "e_score": 50, "s_score": 50, "g_score": 50, "overall_grade": "A+"}},
                {"standard": "K-ESG", "scorecard": {"overall_score": 91, "e_score": 120, "s_score": 60, "g_score": 30}}
            ]
        }"#;

        let record: CompanyEsgRecord = serde_json::from_str(json).expect("record parses");
        assert_eq!(record.scorecards()[0].standard, Standard::KEsg);
        assert_eq!(record.scorecard(Standard::KEsg).environmental().score, 100.0);
        assert_eq!(record.scorecard(Standard::Esrs).overall().grade, Grade::F);
    }

    #[test]
    fn deserialization_requires_k_esg() {
        let json = r#"{"id":"r8","company_name":"Acme","period":"2024-11","scorecards":[]}"#;
        assert!(serde_json::from_str::<CompanyEsgRecord>(json).is_err());
    }
}
