//! Editable form values.

use kyc_store::{Column, Record};

/// The four editable fields, exactly as typed. Replaced wholesale after a
/// successful save rather than edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub customer_id: String,
    pub location: String,
    pub data_throughput: String,
    pub latency: String,
}

impl FormState {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::CustomerId => &self.customer_id,
            Column::Location => &self.location,
            Column::DataThroughput => &self.data_throughput,
            Column::Latency => &self.latency,
        }
    }

    pub fn field_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::CustomerId => &mut self.customer_id,
            Column::Location => &mut self.location,
            Column::DataThroughput => &mut self.data_throughput,
            Column::Latency => &mut self.latency,
        }
    }

    pub fn is_empty(&self) -> bool {
        Column::ALL
            .iter()
            .all(|&column| self.field(column).is_empty())
    }

    /// Record to store, with surrounding whitespace stripped from every field.
    pub fn to_record(&self) -> Record {
        Record::new(
            self.customer_id.trim(),
            self.location.trim(),
            self.data_throughput.trim(),
            self.latency.trim(),
        )
    }
}
