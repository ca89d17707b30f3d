//! The `records` crate contains the records assembled from the CRM forms.

use serde::Serialize;

/// A record assembled from the current values of a fixed, ordered set of form fields.
pub trait FormRecord: Sized {
    /// The ids of the form fields, in the order their values are consumed.
    const FIELD_IDS: &'static [&'static str];

    /// Creates the record from values given in `FIELD_IDS` order.
    ///
    /// Values are taken verbatim, `None` marks a field without a value. Returns `None` if the
    /// number of values does not match.
    fn from_values(values: &[Option<String>]) -> Option<Self>;
}

/// A customer search query.
///
/// Fields without a value are left out when serialized, like in the records below.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// The raw query text, matched against customer names and emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// A customer.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// The first name of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// The last name of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// The email address of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The phone number of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The company the customer works for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// The postal address of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A sales lead for an existing customer.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SalesLead {
    /// The id of the customer the lead belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// The status of the lead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// An interaction with a customer.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    /// The id of the customer the interaction was with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// Free-form notes about the interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A support ticket opened for a customer.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    /// The id of the customer the ticket was opened for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    /// The description of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The status of the ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A worker using the CRM.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    /// The full name of the worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The email address of the worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The position of the worker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl FormRecord for SearchQuery {
    const FIELD_IDS: &'static [&'static str] = &["search"];

    fn from_values(values: &[Option<String>]) -> Option<Self> {
        let [query] = values else {
            return None;
        };

        Some(Self {
            query: query.clone(),
        })
    }
}

impl FormRecord for Customer {
    const FIELD_IDS: &'static [&'static str] = &[
        "first-name",
        "last-name",
        "email",
        "phone",
        "company",
        "address",
    ];

    fn from_values(values: &[Option<String>]) -> Option<Self> {
        let [first_name, last_name, email, phone, company, address] = values else {
            return None;
        };

        Some(Self {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            email: email.clone(),
            phone: phone.clone(),
            company: company.clone(),
            address: address.clone(),
        })
    }
}

impl FormRecord for SalesLead {
    const FIELD_IDS: &'static [&'static str] = &["customer-id", "lead-status"];

    fn from_values(values: &[Option<String>]) -> Option<Self> {
        let [customer_id, status] = values else {
            return None;
        };

        Some(Self {
            customer_id: customer_id.clone(),
            status: status.clone(),
        })
    }
}

impl FormRecord for Interaction {
    const FIELD_IDS: &'static [&'static str] = &["customer-id", "interaction-notes"];

    fn from_values(values: &[Option<String>]) -> Option<Self> {
        let [customer_id, notes] = values else {
            return None;
        };

        Some(Self {
            customer_id: customer_id.clone(),
            notes: notes.clone(),
        })
    }
}

impl FormRecord for SupportTicket {
    const FIELD_IDS: &'static [&'static str] =
        &["customer-id", "ticket-description", "ticket-status"];

    fn from_values(values: &[Option<String>]) -> Option<Self> {
        let [customer_id, description, status] = values else {
            return None;
        };

        Some(Self {
            customer_id: customer_id.clone(),
            description: description.clone(),
            status: status.clone(),
        })
    }
}

impl FormRecord for Worker {
    const FIELD_IDS: &'static [&'static str] = &["worker-name", "worker-email", "worker-position"];

    fn from_values(values: &[Option<String>]) -> Option<Self> {
        let [name, email, position] = values else {
            return None;
        };

        Some(Self {
            name: name.clone(),
            email: email.clone(),
            position: position.clone(),
        })
    }
}

/// Any of the records assembled from the CRM forms.
///
/// Serializes exactly like the wrapped record.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Record {
    /// A customer search query.
    Search(SearchQuery),
    /// A customer.
    Customer(Customer),
    /// A sales lead.
    SalesLead(SalesLead),
    /// A customer interaction.
    Interaction(Interaction),
    /// A support ticket.
    SupportTicket(SupportTicket),
    /// A worker.
    Worker(Worker),
}

impl Record {
    /// Serializes the record as compact JSON with keys in field order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, which does not happen for string-only records.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

macro_rules! impl_from_record {
    ($($variant:ident($record:ty)),* $(,)?) => {
        $(
            impl From<$record> for Record {
                fn from(record: $record) -> Self {
                    Self::$variant(record)
                }
            }
        )*
    };
}

impl_from_record!(
    Search(SearchQuery),
    Customer(Customer),
    SalesLead(SalesLead),
    Interaction(Interaction),
    SupportTicket(SupportTicket),
    Worker(Worker),
);
