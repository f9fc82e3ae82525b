//! The KYC entry and its column layout.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Header row of every store file, in column order.
pub const HEADER: [&str; 4] = ["customer_id", "location", "data_throughput", "latency"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CustomerId,
    Location,
    DataThroughput,
    Latency,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::CustomerId,
        Column::Location,
        Column::DataThroughput,
        Column::Latency,
    ];

    /// Header token as written to the file.
    pub fn name(self) -> &'static str {
        HEADER[self as usize]
    }

    /// Table heading: underscores become spaces, each word title-cased.
    pub fn heading(self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Form label, with units where the column has them.
    pub fn label(self) -> &'static str {
        match self {
            Column::CustomerId => "Customer ID",
            Column::Location => "Location",
            Column::DataThroughput => "Data Throughput (Mbps)",
            Column::Latency => "Latency (ms)",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Column::DataThroughput | Column::Latency)
    }
}

/// One saved entry. Values are kept as the strings the operator typed;
/// the numeric columns are only checked, never reformatted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub customer_id: String,
    pub location: String,
    pub data_throughput: String,
    pub latency: String,
}

impl Record {
    pub fn new(
        customer_id: impl Into<String>,
        location: impl Into<String>,
        data_throughput: impl Into<String>,
        latency: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            location: location.into(),
            data_throughput: data_throughput.into(),
            latency: latency.into(),
        }
    }

    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::CustomerId => &self.customer_id,
            Column::Location => &self.location,
            Column::DataThroughput => &self.data_throughput,
            Column::Latency => &self.latency,
        }
    }

    pub fn fields(&self) -> [&str; 4] {
        Column::ALL.map(|column| self.get(column))
    }

    /// Checks required columns first, then the optional numeric ones, in
    /// column order. The first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for column in [Column::CustomerId, Column::Location] {
            if self.get(column).trim().is_empty() {
                return Err(ValidationError::Required {
                    field: column.name(),
                });
            }
        }
        for column in [Column::DataThroughput, Column::Latency] {
            parse_optional_number(column.name(), self.get(column))?;
        }
        Ok(())
    }

    /// Builds a record from positional fields. Missing trailing fields
    /// become empty strings; anything past the fourth is dropped.
    pub(crate) fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        let mut values: [String; 4] = Default::default();
        for (slot, value) in values.iter_mut().zip(fields) {
            *slot = value.to_string();
        }
        let [customer_id, location, data_throughput, latency] = values;
        Self {
            customer_id,
            location,
            data_throughput,
            latency,
        }
    }
}

/// Parses an optional decimal value. Blank means "not provided".
pub fn parse_optional_number(
    field: &'static str,
    value: &str,
) -> Result<Option<f64>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ValidationError::NotNumeric {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_are_title_cased() {
        let headings: Vec<String> = Column::ALL.iter().map(|c| c.heading()).collect();
        assert_eq!(
            headings,
            ["Customer Id", "Location", "Data Throughput", "Latency"]
        );
    }

    #[test]
    fn required_fields_checked_in_order() {
        let err = Record::new("  ", "", "", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "customer_id required");

        let err = Record::new("C1", " \t", "", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "location required");
    }

    #[test]
    fn numeric_fields_are_optional() {
        assert!(Record::new("C1", "NY", "", "").validate().is_ok());
        assert!(Record::new("C1", "NY", "50.5", "").validate().is_ok());
        assert!(Record::new("C1", "NY", "", "12").validate().is_ok());
        assert!(Record::new("C1", "NY", "1e3", "-0.5").validate().is_ok());
    }

    #[test]
    fn throughput_checked_before_latency() {
        let err = Record::new("C1", "NY", "abc", "xyz").validate().unwrap_err();
        assert_eq!(err.to_string(), "data_throughput must be numeric");

        let err = Record::new("C1", "NY", "100", "xyz").validate().unwrap_err();
        assert_eq!(err.to_string(), "latency must be numeric");
    }

    #[test]
    fn from_fields_pads_and_truncates() {
        let short = Record::from_fields(["C2", "LA"]);
        assert_eq!(short, Record::new("C2", "LA", "", ""));

        let long = Record::from_fields(["C3", "SF", "1", "2", "extra", "more"]);
        assert_eq!(long, Record::new("C3", "SF", "1", "2"));
    }
}
