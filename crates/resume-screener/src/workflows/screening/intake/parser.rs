use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct RosterRecord {
    pub(crate) name: String,
    pub(crate) email: Option<String>,
    pub(crate) resume: String,
}

/// Reads a `name,email,resume` roster. Header matching is case-insensitive and unknown
/// columns are ignored.
pub(crate) fn parse_roster<R: Read>(reader: R) -> Result<Vec<RosterRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let lowered: csv::StringRecord = headers
        .iter()
        .map(|header| header.to_ascii_lowercase())
        .collect();
    csv_reader.set_headers(lowered);

    let mut records = Vec::new();
    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        records.push(RosterRecord {
            name: row.name.trim().to_string(),
            email: row.email.map(|email| email.trim().to_string()),
            resume: row.resume,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(alias = "resume_text", alias = "content")]
    resume: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
