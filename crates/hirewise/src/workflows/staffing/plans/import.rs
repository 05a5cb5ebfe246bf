use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use super::domain::StaffingPlanItemRecord;

#[derive(Debug)]
pub enum StaffingPlanImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for StaffingPlanImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffingPlanImportError::Io(err) => {
                write!(f, "failed to read staffing plan export: {err}")
            }
            StaffingPlanImportError::Csv(err) => {
                write!(f, "invalid staffing plan CSV data: {err}")
            }
        }
    }
}

impl std::error::Error for StaffingPlanImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StaffingPlanImportError::Io(err) => Some(err),
            StaffingPlanImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StaffingPlanImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for StaffingPlanImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads staffing plan rows from a spreadsheet export with the columns
/// `Designation`, `Vacancies`, `Estimated Cost Per Position` and `Assign To`.
pub struct StaffingPlanImporter;

impl StaffingPlanImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<StaffingPlanItemRecord>, StaffingPlanImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<StaffingPlanItemRecord>, StaffingPlanImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rows = Vec::new();

        for row in csv_reader.deserialize::<StaffingPlanRow>() {
            let row = row?;
            if row.designation.is_empty() {
                continue;
            }
            rows.push(StaffingPlanItemRecord {
                designation: row.designation,
                vacancies: row.vacancies,
                estimated_cost_per_position: row.estimated_cost_per_position.unwrap_or_default(),
                assign_to: row.assign_to,
            });
        }

        Ok(rows)
    }
}

#[derive(Debug, Deserialize)]
struct StaffingPlanRow {
    #[serde(rename = "Designation")]
    designation: String,
    #[serde(rename = "Vacancies")]
    vacancies: u32,
    #[serde(
        rename = "Estimated Cost Per Position",
        default,
        deserialize_with = "empty_string_as_decimal"
    )]
    estimated_cost_per_position: Option<Decimal>,
    #[serde(
        rename = "Assign To",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    assign_to: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn empty_string_as_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    opt.map(|value| {
        value
            .replace(',', "")
            .parse::<Decimal>()
            .map_err(serde::de::Error::custom)
    })
    .transpose()
}
