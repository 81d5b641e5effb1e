pub mod cache;
mod parser;

pub use cache::DatasetCache;

use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// One of the six well-being indicators used as scoring inputs.
///
/// The variant order is the canonical factor order used for prompting and
/// for positional weight vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Gdp,
    SocialSupport,
    LifeExpectancy,
    Freedom,
    Generosity,
    Corruption,
}

impl Factor {
    pub const COUNT: usize = 6;

    /// All six factors in canonical order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Gdp,
        Self::SocialSupport,
        Self::LifeExpectancy,
        Self::Freedom,
        Self::Generosity,
        Self::Corruption,
    ];

    /// Column header and prompt label for this factor.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gdp => "GDP",
            Self::SocialSupport => "SocialSupport",
            Self::LifeExpectancy => "LifeExpectancy",
            Self::Freedom => "Freedom",
            Self::Generosity => "Generosity",
            Self::Corruption => "Corruption",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One country row for a single reporting year.
///
/// Identifier columns (rank, year, confidence-interval bounds) are dropped at
/// load time. A factor cell that failed numeric coercion is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRecord {
    pub country: String,
    pub happiness_score: f64,
    pub gdp: Option<f64>,
    pub social_support: Option<f64>,
    pub life_expectancy: Option<f64>,
    pub freedom: Option<f64>,
    pub generosity: Option<f64>,
    pub corruption: Option<f64>,
}

impl CountryRecord {
    /// The coerced value of a single factor, `None` when missing.
    pub fn factor(&self, factor: Factor) -> Option<f64> {
        match factor {
            Factor::Gdp => self.gdp,
            Factor::SocialSupport => self.social_support,
            Factor::LifeExpectancy => self.life_expectancy,
            Factor::Freedom => self.freedom,
            Factor::Generosity => self.generosity,
            Factor::Corruption => self.corruption,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// Load the happiness dataset at `path`, restricted to `year`.
///
/// Rows keep their source order and duplicate countries are passed through
/// untouched. A year with no matching rows yields an empty vector.
pub fn load<P: AsRef<Path>>(path: P, year: i32) -> Result<Vec<CountryRecord>, DatasetError> {
    let file = std::fs::File::open(path)?;
    from_reader(file, year)
}

/// Reader-based variant of [`load`] for in-memory sources and tests.
pub fn from_reader<R: Read>(reader: R, year: i32) -> Result<Vec<CountryRecord>, DatasetError> {
    let records = parser::parse_records(reader, year)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
Country,Year,Rank,HappinessScore,upperwhisker,lowerwhisker,GDP,SocialSupport,LifeExpectancy,Freedom,Generosity,Corruption
Finland,2024,1,7.741,7.815,7.667,1.844,1.572,0.695,0.859,0.142,0.546
Denmark,2024,2,7.583,7.665,7.500,1.908,1.520,0.699,0.823,0.204,0.548
Finland,2023,1,7.804,7.875,7.733,1.888,1.585,0.535,0.772,0.126,0.535
Iceland,2024,3,7.525,7.618,7.433,1.881,1.617,0.718,0.819,0.258,0.182
";

    #[test]
    fn load_keeps_only_requested_year_in_source_order() {
        let records = from_reader(Cursor::new(SAMPLE), 2024).expect("sample parses");
        let countries: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(countries, ["Finland", "Denmark", "Iceland"]);
    }

    #[test]
    fn load_drops_identifier_columns_but_keeps_scores() {
        let records = from_reader(Cursor::new(SAMPLE), 2024).expect("sample parses");
        let finland = &records[0];
        assert_eq!(finland.happiness_score, 7.741);
        assert_eq!(finland.factor(Factor::Gdp), Some(1.844));
        assert_eq!(finland.factor(Factor::Corruption), Some(0.546));
    }

    #[test]
    fn year_with_no_rows_yields_empty_not_error() {
        let records = from_reader(Cursor::new(SAMPLE), 2019).expect("sample parses");
        assert!(records.is_empty());
    }

    #[test]
    fn unparseable_factor_cells_become_missing() {
        let csv = "\
Country,Year,Rank,HappinessScore,upperwhisker,lowerwhisker,GDP,SocialSupport,LifeExpectancy,Freedom,Generosity,Corruption
Atlantis,2024,1,5.0,5.1,4.9,n/a,1.2,,0.5,0.1,0.2
";
        let records = from_reader(Cursor::new(csv), 2024).expect("row parses");
        let atlantis = &records[0];
        assert_eq!(atlantis.factor(Factor::Gdp), None);
        assert_eq!(atlantis.factor(Factor::LifeExpectancy), None);
        assert_eq!(atlantis.factor(Factor::SocialSupport), Some(1.2));
    }

    #[test]
    fn duplicate_countries_are_passed_through() {
        let csv = "\
Country,Year,Rank,HappinessScore,upperwhisker,lowerwhisker,GDP,SocialSupport,LifeExpectancy,Freedom,Generosity,Corruption
Narnia,2024,1,6.0,6.1,5.9,1.0,1.0,0.5,0.5,0.1,0.1
Narnia,2024,2,5.5,5.6,5.4,0.9,0.9,0.4,0.4,0.1,0.1
";
        let records = from_reader(Cursor::new(csv), 2024).expect("rows parse");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn missing_file_is_a_dataset_error() {
        let result = load("does/not/exist.csv", 2024);
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }

    #[test]
    fn missing_required_column_is_a_dataset_error() {
        let csv = "Country,Year\nFinland,2024\n";
        let result = from_reader(Cursor::new(csv), 2024);
        assert!(matches!(result, Err(DatasetError::Csv(_))));
    }

    #[test]
    fn factor_labels_match_dataset_headers() {
        let labels: Vec<&str> = Factor::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            [
                "GDP",
                "SocialSupport",
                "LifeExpectancy",
                "Freedom",
                "Generosity",
                "Corruption"
            ]
        );
    }
}
