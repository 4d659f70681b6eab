//! Company and contact records as produced by the upstream pipeline.
//!
//! Field names on the wire follow the stored document shape (`FirmName`,
//! `AUM`, `People`, ...) so the listing endpoint returns records in the same
//! form the pipeline writes them.

use serde::{Deserialize, Serialize};

/// Opaque, store-assigned identifier of a company record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One tracked firm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "_id")]
    pub id: CompanyId,
    #[serde(rename = "FirmName")]
    pub firm_name: String,
    #[serde(rename = "AUM", default, skip_serializing_if = "Option::is_none")]
    pub aum: Option<String>,
    #[serde(rename = "Link", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "WebsiteText", default, skip_serializing_if = "Option::is_none")]
    pub website_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Contacts in the order the store returned them, each keyed by email.
    #[serde(
        rename = "People",
        default,
        with = "people_map",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub people: Vec<Person>,
}

impl Company {
    /// A company with only the required fields set.
    #[must_use]
    pub fn new(id: CompanyId, firm_name: impl Into<String>) -> Self {
        Self {
            id,
            firm_name: firm_name.into(),
            aum: None,
            link: None,
            status: None,
            website_text: None,
            error_message: None,
            people: Vec::new(),
        }
    }
}

/// A discovered contact at a company.
///
/// `email` is the map key in the stored document and never empty; the store
/// layer drops entries that would violate this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(skip)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Person {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// First and last name joined by a space; empty parts are left out.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// (De)serializes `Vec<Person>` as an email-keyed map, preserving order.
mod people_map {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserializer, Serializer};

    use super::Person;

    pub fn serialize<S>(people: &[Person], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(people.iter().map(|p| (p.email.as_str(), p)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Person>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PeopleVisitor;

        impl<'de> Visitor<'de> for PeopleVisitor {
            type Value = Vec<Person>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of email address to contact")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Vec::new())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Vec::new())
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut people = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((email, mut person)) = access.next_entry::<String, Person>()? {
                    person.email = email;
                    people.push(person);
                }
                Ok(people)
            }
        }

        deserializer.deserialize_any(PeopleVisitor)
    }
}
