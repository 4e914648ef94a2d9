// Position of each mapped column in the CSV header. Columns not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvColumns {
    customer_id: Option<usize>,
    company: Option<usize>,
    email: Option<usize>,
    country: Option<usize>,
    subscription_date: Option<usize>,
    city: Option<usize>,
    phone: Option<usize>,
    website: Option<usize>,
}

impl CsvColumns {
    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|header| header == name);

        Self {
            customer_id: position("Customer Id"),
            company: position("Company"),
            email: position("Email"),
            country: position("Country"),
            subscription_date: position("Subscription Date"),
            city: position("City"),
            phone: position("Phone 1"),
            website: position("Website"),
        }
    }

    // A column missing from the header, or a row too short to reach it, yields `None`.
    pub fn extract(&self, record: &csv::StringRecord) -> CsvCustomerRow {
        let field = |index: Option<usize>| {
            index
                .and_then(|index| record.get(index))
                .map(str::to_string)
        };

        CsvCustomerRow {
            customer_id: field(self.customer_id),
            company: field(self.company),
            email: field(self.email),
            country: field(self.country),
            subscription_date: field(self.subscription_date),
            city: field(self.city),
            phone: field(self.phone),
            website: field(self.website),
        }
    }
}

// One row of the customers CSV, keyed by source column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvCustomerRow {
    pub customer_id: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub subscription_date: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// A normalized customer record. `id` is the 1-based position of the row in the source.
/// Fields absent from the source row are left out of the JSON.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Customer {
    pub fn from_row(id: u64, row: CsvCustomerRow) -> Self {
        Self {
            id,
            company_id: row.customer_id,
            name: row.company,
            email: row.email,
            status: row.country,
            updated_at: row.subscription_date,
            city: row.city,
            phone: row.phone,
            website: row.website,
        }
    }
}

/// The full in-memory collection, in source row order. Never mutated once built.
#[derive(Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Customer>,
}

impl Dataset {
    pub fn new(records: Vec<Customer>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Customer> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Customer] {
        &self.records
    }
}
