//! Firm-name search.

use jobhunt_core::Company;

/// Case-insensitive substring match on the firm name. An empty query
/// matches everything.
#[must_use]
pub fn matches_query(company: &Company, query: &str) -> bool {
    query.is_empty() || company.firm_name.to_lowercase().contains(&query.to_lowercase())
}

/// The companies whose firm name matches `query`, in their original order.
#[must_use]
pub fn filter_companies<'a>(companies: &'a [Company], query: &str) -> Vec<&'a Company> {
    companies
        .iter()
        .filter(|company| matches_query(company, query))
        .collect()
}
