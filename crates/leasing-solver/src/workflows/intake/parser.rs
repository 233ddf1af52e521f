use super::normalizer::clean_field;
use super::{validate_amenities, validate_availabilities, validate_tenancies, IntakeError};
use crate::money::Money;
use crate::workflows::availability::{ActiveAvailability, TenancyRecord, TenancyStatus};
use crate::workflows::rent_gap::{AmenityId, AmenityOption};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads kernel inputs from CSV exports with a header row.
pub struct CsvIntake;

impl CsvIntake {
    /// Expects `id,amount` columns.
    pub fn amenities<R: Read>(reader: R) -> Result<Vec<AmenityOption>, IntakeError> {
        let options = read_rows::<AmenityRow, _>(reader)?
            .into_iter()
            .enumerate()
            .map(|(index, row)| row.into_option(index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        validate_amenities(&options)?;
        Ok(options)
    }

    /// Expects `id,unit_id,status` columns.
    pub fn tenancies<R: Read>(reader: R) -> Result<Vec<TenancyRecord>, IntakeError> {
        let tenancies: Vec<TenancyRecord> = read_rows::<TenancyRow, _>(reader)?
            .into_iter()
            .map(TenancyRow::into_record)
            .collect();
        validate_tenancies(&tenancies)?;
        Ok(tenancies)
    }

    /// Expects `id,unit_id,property_code,status` columns.
    pub fn availabilities<R: Read>(reader: R) -> Result<Vec<ActiveAvailability>, IntakeError> {
        let availabilities: Vec<ActiveAvailability> = read_rows::<AvailabilityRow, _>(reader)?
            .into_iter()
            .map(AvailabilityRow::into_record)
            .collect();
        validate_availabilities(&availabilities)?;
        Ok(availabilities)
    }

    pub fn amenities_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<AmenityOption>, IntakeError> {
        Self::amenities(File::open(path)?)
    }

    pub fn tenancies_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<TenancyRecord>, IntakeError> {
        Self::tenancies(File::open(path)?)
    }

    pub fn availabilities_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ActiveAvailability>, IntakeError> {
        Self::availabilities(File::open(path)?)
    }
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<T>() {
        rows.push(row?);
    }
    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct AmenityRow {
    id: String,
    amount: String,
}

impl AmenityRow {
    fn into_option(self, line: usize) -> Result<AmenityOption, IntakeError> {
        let amount = self
            .amount
            .parse::<Money>()
            .map_err(|err| IntakeError::invalid(line, err.to_string()))?;
        Ok(AmenityOption {
            id: AmenityId(clean_field(&self.id)),
            amount,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TenancyRow {
    id: String,
    unit_id: String,
    #[serde(default)]
    status: String,
}

impl TenancyRow {
    fn into_record(self) -> TenancyRecord {
        TenancyRecord {
            id: clean_field(&self.id).into(),
            unit_id: clean_field(&self.unit_id).into(),
            status: TenancyStatus::from(clean_field(&self.status)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityRow {
    id: String,
    unit_id: String,
    #[serde(default)]
    property_code: String,
    #[serde(default)]
    status: String,
}

impl AvailabilityRow {
    fn into_record(self) -> ActiveAvailability {
        ActiveAvailability {
            id: clean_field(&self.id).into(),
            unit_id: clean_field(&self.unit_id).into(),
            property_code: clean_field(&self.property_code),
            status: clean_field(&self.status),
        }
    }
}
