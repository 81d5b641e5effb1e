use super::{ClusterAssignment, ClusterId};
use serde::Deserialize;
use std::io::Read;

pub(crate) fn parse_assignments<R: Read>(
    reader: R,
) -> Result<Vec<ClusterAssignment>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut assignments = Vec::new();

    for record in csv_reader.deserialize::<ClusterRow>() {
        let row = record?;
        assignments.push(ClusterAssignment {
            country: row.country,
            iso_alpha: row.iso_alpha,
            cluster: ClusterId(row.cluster),
        });
    }

    Ok(assignments)
}

#[derive(Debug, Deserialize)]
struct ClusterRow {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "iso_alpha")]
    iso_alpha: String,
    #[serde(rename = "Cluster")]
    cluster: u8,
}
