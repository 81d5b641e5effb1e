use super::CountryRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_records<R: Read>(
    reader: R,
    year: i32,
) -> Result<Vec<CountryRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<HappinessRow>() {
        let row = record?;
        if row.year != year {
            continue;
        }
        records.push(row.into_record());
    }

    Ok(records)
}

/// Raw dataset row. Rank and the confidence-interval whiskers carry no
/// scoring information and are never read.
#[derive(Debug, Deserialize)]
struct HappinessRow {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "HappinessScore")]
    happiness_score: f64,
    #[serde(rename = "GDP", deserialize_with = "coerce_numeric")]
    gdp: Option<f64>,
    #[serde(rename = "SocialSupport", deserialize_with = "coerce_numeric")]
    social_support: Option<f64>,
    #[serde(rename = "LifeExpectancy", deserialize_with = "coerce_numeric")]
    life_expectancy: Option<f64>,
    #[serde(rename = "Freedom", deserialize_with = "coerce_numeric")]
    freedom: Option<f64>,
    #[serde(rename = "Generosity", deserialize_with = "coerce_numeric")]
    generosity: Option<f64>,
    #[serde(rename = "Corruption", deserialize_with = "coerce_numeric")]
    corruption: Option<f64>,
}

impl HappinessRow {
    fn into_record(self) -> CountryRecord {
        CountryRecord {
            country: self.country,
            happiness_score: self.happiness_score,
            gdp: self.gdp,
            social_support: self.social_support,
            life_expectancy: self.life_expectancy,
            freedom: self.freedom,
            generosity: self.generosity,
            corruption: self.corruption,
        }
    }
}

/// Factor cells tolerate junk: anything that does not parse as a float loads
/// as a missing value instead of failing the whole file.
fn coerce_numeric<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|value| value.trim().parse::<f64>().ok()))
}
