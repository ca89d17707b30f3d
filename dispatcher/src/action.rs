use std::fmt::{self, Display, Formatter};

use records::{
    Customer, FormRecord, Interaction, Record, SalesLead, SearchQuery, SupportTicket, Worker,
};

use crate::Error;

/// One of the form actions of the CRM page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Searching customers by name or email.
    Search,
    /// Creating a customer.
    CreateCustomer,
    /// Creating a sales lead.
    CreateLead,
    /// Logging a customer interaction.
    LogInteraction,
    /// Creating a support ticket.
    CreateTicket,
    /// Creating a worker.
    CreateWorker,
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Search => "search",
            Self::CreateCustomer => "create-customer",
            Self::CreateLead => "create-lead",
            Self::LogInteraction => "log-interaction",
            Self::CreateTicket => "create-ticket",
            Self::CreateWorker => "create-worker",
        };

        f.write_str(name)
    }
}

/// An HTTP method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// The `GET` method.
    Get,
    /// The `POST` method.
    Post,
}

/// The backend endpoint an action's record is meant for.
///
/// Only describes the request, no request is ever sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// The request method.
    pub method: Method,
    /// The request path.
    pub path: &'static str,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let method = match self.method {
            Method::Get => "GET",
            Method::Post => "POST",
        };

        write!(f, "{method} {}", self.path)
    }
}

/// A template for the notification shown for an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTemplate {
    /// A fixed prefix followed by the record serialized as JSON.
    Json {
        /// The text preceding the JSON.
        prefix: &'static str,
    },
    /// A fixed sentence with the raw value of the first field in between, `undefined` if the field
    /// has no value.
    Quoted {
        /// The text preceding the value.
        before: &'static str,
        /// The text following the value.
        after: &'static str,
    },
}

impl MessageTemplate {
    /// Renders the notification for the given record and the field values it was built from.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be serialized.
    pub fn render(self, record: &Record, values: &[Option<String>]) -> Result<String, Error> {
        match self {
            Self::Json { prefix } => Ok(format!("{prefix}{}", record.to_json()?)),
            Self::Quoted { before, after } => {
                let value = values
                    .first()
                    .and_then(Option::as_deref)
                    .unwrap_or("undefined");

                Ok(format!("{before}{value}{after}"))
            }
        }
    }
}

/// A declarative description of a form action.
#[derive(Clone, Copy)]
pub struct ActionDescriptor {
    /// The kind of the action.
    pub kind: ActionKind,
    /// The id of the element whose click triggers the action.
    pub trigger_id: &'static str,
    /// The ids of the fields read on click, in record order.
    pub field_ids: &'static [&'static str],
    /// Builds the record from the field values, given in `field_ids` order.
    pub build: fn(&[Option<String>]) -> Option<Record>,
    /// The template of the notification.
    pub message: MessageTemplate,
    /// The backend endpoint the record is meant for.
    pub endpoint: Endpoint,
}

impl fmt::Debug for ActionDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("kind", &self.kind)
            .field("trigger_id", &self.trigger_id)
            .field("field_ids", &self.field_ids)
            .field("message", &self.message)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ActionDescriptor {
    /// Returns the descriptor of the given action from [`ACTIONS`].
    #[must_use]
    pub fn find(kind: ActionKind) -> &'static Self {
        ACTIONS
            .iter()
            .find(|action| action.kind == kind)
            .expect("every action kind should have a descriptor")
    }
}

fn build<R: FormRecord + Into<Record>>(values: &[Option<String>]) -> Option<Record> {
    R::from_values(values).map(Into::into)
}

/// The form actions of the CRM page.
pub static ACTIONS: [ActionDescriptor; 6] = [
    ActionDescriptor {
        kind: ActionKind::Search,
        trigger_id: "search-button",
        field_ids: SearchQuery::FIELD_IDS,
        build: build::<SearchQuery>,
        message: MessageTemplate::Quoted {
            before: "Searching for customers with name or email containing \"",
            after: "\"",
        },
        endpoint: Endpoint {
            method: Method::Get,
            path: "/customers/",
        },
    },
    ActionDescriptor {
        kind: ActionKind::CreateCustomer,
        trigger_id: "create-customer",
        field_ids: Customer::FIELD_IDS,
        build: build::<Customer>,
        message: MessageTemplate::Json {
            prefix: "Customer created: ",
        },
        endpoint: Endpoint {
            method: Method::Post,
            path: "/customers/",
        },
    },
    ActionDescriptor {
        kind: ActionKind::CreateLead,
        trigger_id: "create-lead",
        field_ids: SalesLead::FIELD_IDS,
        build: build::<SalesLead>,
        message: MessageTemplate::Json {
            prefix: "Sales Lead created: ",
        },
        endpoint: Endpoint {
            method: Method::Post,
            path: "/sales_leads/",
        },
    },
    ActionDescriptor {
        kind: ActionKind::LogInteraction,
        trigger_id: "log-interaction",
        field_ids: Interaction::FIELD_IDS,
        build: build::<Interaction>,
        message: MessageTemplate::Json {
            prefix: "Interaction logged: ",
        },
        endpoint: Endpoint {
            method: Method::Post,
            path: "/interactions/",
        },
    },
    ActionDescriptor {
        kind: ActionKind::CreateTicket,
        trigger_id: "create-ticket",
        field_ids: SupportTicket::FIELD_IDS,
        build: build::<SupportTicket>,
        message: MessageTemplate::Json {
            prefix: "Support ticket created: ",
        },
        endpoint: Endpoint {
            method: Method::Post,
            path: "/support_tickets/",
        },
    },
    ActionDescriptor {
        kind: ActionKind::CreateWorker,
        trigger_id: "create-worker",
        field_ids: Worker::FIELD_IDS,
        build: build::<Worker>,
        message: MessageTemplate::Json {
            prefix: "Worker added: ",
        },
        endpoint: Endpoint {
            method: Method::Post,
            path: "/workers/",
        },
    },
];
