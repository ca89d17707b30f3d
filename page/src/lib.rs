//! The `page` crate contains page fixtures: the elements of a CRM page and a script of user steps.

use std::{fs::read_to_string, io, path::Path, str::FromStr};

use dom::{ClickReport, ElementKind, MemoryDocument};
use serde::{Deserialize, Serialize};

/// A page fixture.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// The title of the page.
    pub title: String,
    /// The elements present once the markup finished loading, in document order.
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
    /// The steps performed by the user after the page was initialized.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// An element of a page fixture.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementSpec {
    /// The id of the element.
    pub id: String,
    /// The kind of the element.
    pub kind: Kind,
    /// The initial value of the element, only allowed for form controls.
    #[serde(default)]
    pub value: String,
}

/// The kind of an element of a page fixture.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// An `input` element.
    Input,
    /// A `textarea` element.
    TextArea,
    /// A `select` element.
    Select,
    /// A `button` element.
    Button,
    /// A `div` or any other element without a value.
    Container,
}

impl From<Kind> for ElementKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Input => Self::Input,
            Kind::TextArea => Self::TextArea,
            Kind::Select => Self::Select,
            Kind::Button => Self::Button,
            Kind::Container => Self::Container,
        }
    }
}

/// A step performed by the user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Clicks the element with the given id.
    Click(String),
    /// Replaces the value of a form control.
    Fill {
        /// The id of the form control.
        id: String,
        /// The new value.
        value: String,
    },
    /// Appends an element to the end of the page.
    Append(ElementSpec),
    /// Removes the element with the given id.
    Remove(String),
}

impl Step {
    /// Performs the step on the given document. Returns the click report for clicks.
    ///
    /// # Errors
    ///
    /// Returns an error if the step targets an element that does not exist or has no value.
    pub fn apply(&self, document: &MemoryDocument) -> Result<Option<ClickReport>, Error> {
        match self {
            Self::Click(id) => return Ok(Some(document.click(id)?)),
            Self::Fill { id, value } => document.set_value(id, value.as_str())?,
            Self::Append(element) => append(document, element)?,
            Self::Remove(id) => {
                if !document.remove(id) {
                    return Err(dom::Error::MissingElement(id.clone()).into());
                }
            }
        }

        Ok(None)
    }
}

impl Page {
    /// Parses a page fixture from the TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file could not be read or is not a valid page fixture.
    pub fn try_from_path(path: &Path) -> Result<Self, Error> {
        read_to_string(path)?.parse()
    }

    /// Creates a document containing the elements of the page.
    ///
    /// # Errors
    ///
    /// Returns an error if an element without a value is given an initial value.
    pub fn build_document(&self) -> Result<MemoryDocument, Error> {
        let document = MemoryDocument::new();

        for element in &self.elements {
            append(&document, element)?;
        }

        Ok(document)
    }
}

fn append(document: &MemoryDocument, element: &ElementSpec) -> Result<(), Error> {
    let appended = document.append(element.id.clone(), element.kind.into());

    if !element.value.is_empty() {
        appended.set_value(element.value.as_str())?;
    }

    Ok(())
}

impl FromStr for Page {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Error> {
        Ok(toml::from_str(string)?)
    }
}

impl Default for Page {
    fn default() -> Self {
        include_str!("default.toml")
            .parse()
            .expect("default page should always be deserializable")
    }
}

/// The error type for errors regarding page fixtures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to open file.
    #[error("failed to open file")]
    FileOpen(#[from] io::Error),
    /// Failed to parse TOML.
    #[error("failed to parse TOML")]
    TomlParse(#[from] toml::de::Error),
    /// A step or element does not fit the document.
    #[error("invalid page: {0}")]
    Dom(#[from] dom::Error),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use dom::Document;

    use super::*;

    const WORKERS: &str = include_str!("../pages/workers.toml");
    const CUSTOMERS: &str = include_str!("../pages/customers.toml");

    #[test]
    fn default_page_contains_every_trigger() {
        let page = Page::default();
        let ids: Vec<&str> = page.elements.iter().map(|element| element.id.as_str()).collect();

        for trigger in [
            "search-button",
            "create-customer",
            "create-lead",
            "log-interaction",
            "create-ticket",
            "create-worker",
        ] {
            assert!(ids.contains(&trigger), "{trigger}");
        }
    }

    #[test]
    fn bundled_pages_parse() {
        let workers: Page = WORKERS.parse().unwrap();
        let customers: Page = CUSTOMERS.parse().unwrap();

        assert_eq!(workers.title, "Workers");
        assert_eq!(customers.title, "Customers");
        assert!(workers.build_document().is_ok());
        assert!(customers.build_document().is_ok());
    }

    #[test]
    fn steps_parse_from_tables() {
        let page: Page = r#"
            title = "Steps"

            [[elements]]
            id = "search"
            kind = "input"
            value = "Ada"

            [[steps]]
            fill = { id = "search", value = "Grace" }

            [[steps]]
            append = { id = "notes", kind = "textarea" }

            [[steps]]
            remove = "notes"

            [[steps]]
            click = "search"
        "#
        .parse()
        .unwrap();

        assert_eq!(
            page.steps,
            [
                Step::Fill {
                    id: "search".to_owned(),
                    value: "Grace".to_owned()
                },
                Step::Append(ElementSpec {
                    id: "notes".to_owned(),
                    kind: Kind::TextArea,
                    value: String::new()
                }),
                Step::Remove("notes".to_owned()),
                Step::Click("search".to_owned()),
            ]
        );
    }

    #[test]
    fn document_keeps_initial_values_and_order() {
        let page: Page = r#"
            title = "Order"
            elements = [
                { id = "b", kind = "button" },
                { id = "a", kind = "select", value = "open" },
            ]
        "#
        .parse()
        .unwrap();

        let document = page.build_document().unwrap();

        assert_eq!(document.ids(), ["b", "a"]);
        assert_eq!(document.value_of("a").unwrap().as_deref(), Some("open"));
    }

    #[test]
    fn containers_cannot_carry_values() {
        let page: Page = r#"
            title = "Invalid"
            elements = [{ id = "panel", kind = "container", value = "text" }]
        "#
        .parse()
        .unwrap();

        assert!(matches!(
            page.build_document(),
            Err(Error::Dom(dom::Error::NotAFormControl(_)))
        ));
    }

    #[test]
    fn steps_on_missing_elements_fail() {
        let document = MemoryDocument::new();

        assert!(Step::Click("create-lead".to_owned()).apply(&document).is_err());
        assert!(Step::Remove("create-lead".to_owned()).apply(&document).is_err());
    }

    #[test]
    fn fill_and_append_change_the_document() {
        let document = MemoryDocument::new();

        Step::Append(ElementSpec {
            id: "search".to_owned(),
            kind: Kind::Input,
            value: "Ada".to_owned(),
        })
        .apply(&document)
        .unwrap();
        assert_eq!(document.value_of("search").unwrap().as_deref(), Some("Ada"));

        Step::Fill {
            id: "search".to_owned(),
            value: "Grace".to_owned(),
        }
        .apply(&document)
        .unwrap();
        assert_eq!(document.value_of("search").unwrap().as_deref(), Some("Grace"));
    }

    #[test]
    fn pages_load_from_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WORKERS.as_bytes()).unwrap();

        let page = Page::try_from_path(file.path()).unwrap();

        assert_eq!(page, WORKERS.parse::<Page>().unwrap());
    }

    #[test]
    fn invalid_files_are_reported() {
        let directory = tempfile::tempdir().unwrap();

        assert!(matches!(
            Page::try_from_path(&directory.path().join("missing.toml")),
            Err(Error::FileOpen(_))
        ));

        let path = directory.path().join("broken.toml");
        std::fs::write(&path, "title = ").unwrap();

        assert!(matches!(
            Page::try_from_path(&path),
            Err(Error::TomlParse(_))
        ));
    }
}
