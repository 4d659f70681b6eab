//! Decoding of stored company documents into typed records.
//!
//! The collection is written by an external pipeline, so nothing about a
//! document's shape is trusted: scalars may arrive as numbers or strings,
//! empty strings stand in for missing values, and contact maps may carry
//! junk keys.

use jobhunt_core::{Company, CompanyId, Person};
use mongodb::bson::{Bson, Document};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("document has no usable _id")]
    MissingId,
    #[error("document {0} has no FirmName")]
    MissingFirmName(String),
}

/// Decode every document, skipping (and logging) the ones that fail.
#[must_use]
pub fn decode_companies(documents: Vec<Document>) -> Vec<Company> {
    let total = documents.len();
    let companies: Vec<Company> = documents
        .into_iter()
        .filter_map(|document| match decode_company(&document) {
            Ok(company) => Some(company),
            Err(error) => {
                tracing::warn!(error = %error, "skipping malformed company document");
                None
            }
        })
        .collect();

    if companies.len() < total {
        tracing::warn!(
            decoded = companies.len(),
            skipped = total - companies.len(),
            "company listing contained malformed documents"
        );
    }
    companies
}

/// Decode one stored document into a [`Company`].
///
/// # Errors
///
/// Returns [`DecodeError`] when the identifier or firm name is absent.
pub fn decode_company(document: &Document) -> Result<Company, DecodeError> {
    let id = document
        .get("_id")
        .and_then(id_text)
        .ok_or(DecodeError::MissingId)?;
    let firm_name = text(document, "FirmName")
        .ok_or_else(|| DecodeError::MissingFirmName(id.clone()))?;

    let mut company = Company::new(CompanyId::new(id), firm_name);
    company.aum = text(document, "AUM");
    company.link = text(document, "Link");
    company.status = text(document, "Status");
    company.website_text = text(document, "WebsiteText");
    company.error_message = text(document, "error_message");
    company.people = match document.get("People") {
        Some(Bson::Document(people)) => decode_people(company.id.as_str(), people),
        None | Some(Bson::Null) => Vec::new(),
        Some(other) => {
            tracing::warn!(
                company_id = %company.id,
                kind = ?other.element_type(),
                "ignoring People field that is not a document"
            );
            Vec::new()
        }
    };
    Ok(company)
}

fn decode_people(company_id: &str, people: &Document) -> Vec<Person> {
    people
        .iter()
        .filter_map(|(email, value)| {
            if email.trim().is_empty() {
                tracing::warn!(company_id, "dropping contact with empty email key");
                return None;
            }
            let Bson::Document(fields) = value else {
                tracing::warn!(company_id, email, "dropping contact that is not a document");
                return None;
            };
            Some(Person {
                email: email.clone(),
                first_name: text(fields, "first_name"),
                last_name: text(fields, "last_name"),
                position: text(fields, "position"),
                seniority: text(fields, "seniority"),
                department: text(fields, "department"),
                linkedin: text(fields, "linkedin"),
                confidence: fields.get("confidence").and_then(number),
            })
        })
        .collect()
}

fn id_text(value: &Bson) -> Option<String> {
    match value {
        Bson::ObjectId(oid) => Some(oid.to_hex()),
        other => scalar_text(other),
    }
}

/// A field rendered as display text; absent, null and blank all map to `None`.
fn text(document: &Document, key: &str) -> Option<String> {
    document.get(key).and_then(scalar_text)
}

fn scalar_text(value: &Bson) -> Option<String> {
    match value {
        Bson::String(s) => (!s.trim().is_empty()).then(|| s.clone()),
        Bson::Int32(n) => Some(n.to_string()),
        Bson::Int64(n) => Some(n.to_string()),
        Bson::Double(n) => Some(n.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(n) => Some(*n),
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, oid::ObjectId};

    use super::*;

    #[test]
    fn decodes_full_document() {
        let oid = ObjectId::new();
        let document = doc! {
            "_id": oid,
            "FirmName": "Birch Street Capital",
            "AUM": "$450M",
            "Link": "https://birchstreet.example",
            "Status": "Contacted",
            "WebsiteText": "We invest in things.",
            "People": {
                "jane@birchstreet.example": {
                    "first_name": "Jane",
                    "last_name": "Doe",
                    "position": "Partner",
                    "seniority": "senior",
                    "department": "executive",
                    "linkedin": "https://linkedin.com/in/janedoe",
                    "confidence": 97,
                },
            },
        };

        let company = decode_company(&document).expect("decode");
        assert_eq!(company.id.as_str(), oid.to_hex());
        assert_eq!(company.firm_name, "Birch Street Capital");
        assert_eq!(company.aum.as_deref(), Some("$450M"));
        assert_eq!(company.status.as_deref(), Some("Contacted"));
        assert_eq!(company.people.len(), 1);
        let jane = &company.people[0];
        assert_eq!(jane.email, "jane@birchstreet.example");
        assert_eq!(jane.position.as_deref(), Some("Partner"));
        assert_eq!(jane.confidence, Some(97.0));
    }

    #[test]
    fn numeric_aum_becomes_display_text() {
        let document = doc! { "_id": "c1", "FirmName": "Acme", "AUM": 1_500_000_i64 };
        let company = decode_company(&document).expect("decode");
        assert_eq!(company.aum.as_deref(), Some("1500000"));
    }

    #[test]
    fn blank_and_null_optionals_are_absent() {
        let document = doc! {
            "_id": "c1",
            "FirmName": "Acme",
            "AUM": "",
            "Status": Bson::Null,
            "error_message": "   ",
        };
        let company = decode_company(&document).expect("decode");
        assert!(company.aum.is_none());
        assert!(company.status.is_none());
        assert!(company.error_message.is_none());
        assert!(company.people.is_empty());
    }

    #[test]
    fn missing_firm_name_is_rejected() {
        let document = doc! { "_id": "c9", "AUM": "$1B" };
        assert_eq!(
            decode_company(&document),
            Err(DecodeError::MissingFirmName("c9".to_string()))
        );
    }

    #[test]
    fn missing_id_is_rejected() {
        let document = doc! { "FirmName": "Nameless" };
        assert_eq!(decode_company(&document), Err(DecodeError::MissingId));
    }

    #[test]
    fn contacts_with_empty_keys_or_bad_shape_are_dropped() {
        let document = doc! {
            "_id": "c1",
            "FirmName": "Acme",
            "People": {
                "": { "first_name": "Ghost" },
                "bad@acme.example": "not a document",
                "ok@acme.example": { "confidence": "88.5" },
            },
        };
        let company = decode_company(&document).expect("decode");
        assert_eq!(company.people.len(), 1);
        assert_eq!(company.people[0].email, "ok@acme.example");
        assert_eq!(company.people[0].confidence, Some(88.5));
    }

    #[test]
    fn stored_text_is_kept_verbatim() {
        let website = format!("{}\n", "w".repeat(200));
        let document = doc! {
            "_id": "c1",
            "FirmName": "  Acme  ",
            "WebsiteText": website.clone(),
        };
        let company = decode_company(&document).expect("decode");
        assert_eq!(company.firm_name, "  Acme  ");
        assert_eq!(company.website_text.as_deref(), Some(website.as_str()));
        assert_eq!(website.chars().count(), 201);
    }

    #[test]
    fn contact_keys_are_kept_as_stored() {
        let document = doc! {
            "_id": "c1",
            "FirmName": "Acme",
            "People": {
                "a@x.com": { "first_name": "Ann" },
                " a@x.com": { "first_name": "Spaced" },
                "  ": { "first_name": "Blank" },
            },
        };
        let company = decode_company(&document).expect("decode");
        let emails: Vec<&str> = company.people.iter().map(|p| p.email.as_str()).collect();
        assert_eq!(emails, ["a@x.com", " a@x.com"]);
    }

    #[test]
    fn decode_companies_skips_malformed_documents() {
        let documents = vec![
            doc! { "_id": "a", "FirmName": "Alpha" },
            doc! { "_id": "b" },
            doc! { "_id": "c", "FirmName": "Gamma" },
        ];
        let names: Vec<String> = decode_companies(documents)
            .into_iter()
            .map(|c| c.firm_name)
            .collect();
        assert_eq!(names, ["Alpha", "Gamma"]);
    }

    #[test]
    fn empty_collection_decodes_to_empty_list() {
        assert!(decode_companies(Vec::new()).is_empty());
    }
}
