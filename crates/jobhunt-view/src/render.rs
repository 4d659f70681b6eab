//! HTML markup for the directory.
//!
//! The whole directory is rendered once; afterwards the browser bindings only
//! flip `hidden` on rows, swap the theme class, and re-render individual
//! website cells, so email drafts typed into a row survive searching.

use jobhunt_core::{Company, CompanyId, Person};

use crate::state::{DirectoryView, Theme};
use crate::text::{is_truncatable, truncate_text, TRUNCATE_AT};

pub const CONTAINER_ID: &str = "directory";
pub const SEARCH_INPUT_ID: &str = "company-search";
pub const DARK_MODE_TOGGLE_ID: &str = "dark-mode-toggle";
pub const THEME_LABEL_ID: &str = "theme-label";
pub const ROWS_ID: &str = "company-rows";

pub const ACTION_EXPAND: &str = "expand";
pub const ACTION_COLLAPSE: &str = "collapse";

const NOT_APPLICABLE: &str = "N/A";

/// DOM id of a company's table row.
#[must_use]
pub fn row_dom_id(id: &CompanyId) -> String {
    format!("row-{id}")
}

/// DOM id of a company's website-text cell.
#[must_use]
pub fn website_cell_dom_id(id: &CompanyId) -> String {
    format!("website-{id}")
}

/// Class attribute of the outer container for a theme.
#[must_use]
pub fn container_class(theme: Theme) -> String {
    format!("container {}", theme.css_class())
}

/// Full markup of the directory: theme toggle, title, search box and table.
#[must_use]
pub fn render_directory(view: &DirectoryView) -> String {
    let theme = view.theme();
    format!(
        r#"<div id="{CONTAINER_ID}" class="{class}">
  <div class="toggle-switch">
    <label class="switch-label">
      <input type="checkbox" id="{DARK_MODE_TOGGLE_ID}"{checked}>
      <span class="slider"></span>
    </label>
    <span id="{THEME_LABEL_ID}">{label}</span>
  </div>
  <h1 class="title">Job Hunt Pipeline Data</h1>
  <input type="text" id="{SEARCH_INPUT_ID}" class="search-bar" placeholder="Search Company Name" value="{search}">
  <div class="table-container">
    <table class="table">
      <thead>
        <tr>
          <th>Company Name</th>
          <th>AUM</th>
          <th>Link</th>
          <th>Status</th>
          <th>Website Content</th>
          <th>People</th>
          <th>Email Draft</th>
          <th>Email Action</th>
        </tr>
      </thead>
      <tbody id="{ROWS_ID}">{rows}</tbody>
    </table>
  </div>
</div>"#,
        class = container_class(theme),
        checked = if view.dark_mode() { " checked" } else { "" },
        label = theme.label(),
        search = escape_html(view.search()),
        rows = render_rows(view),
    )
}

/// Every held company as a table row; rows outside the current search are
/// emitted with the `hidden` attribute.
#[must_use]
pub fn render_rows(view: &DirectoryView) -> String {
    view.row_visibility()
        .into_iter()
        .map(|(company, visible)| {
            render_company_row(company, view.is_expanded(&company.id), visible)
        })
        .collect()
}

#[must_use]
pub fn render_company_row(company: &Company, expanded: bool, visible: bool) -> String {
    let link = match company.link.as_deref() {
        Some(url) => format!(
            r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{text}</a>"#,
            href = escape_html(url),
            text = escape_html(url),
        ),
        None => NOT_APPLICABLE.to_string(),
    };
    let status = match company.error_message.as_deref() {
        Some(error) => format!(
            r#"{}<br><small class="error-message">{}</small>"#,
            or_na(company.status.as_deref()),
            escape_html(error)
        ),
        None => or_na(company.status.as_deref()),
    };

    format!(
        r#"<tr id="{row_id}"{hidden}>
  <td>{firm}</td>
  <td>{aum}</td>
  <td>{link}</td>
  <td>{status}</td>
  <td class="website-text-cell" id="{cell_id}">{website}</td>
  <td>{people}</td>
  <td><textarea class="email-draft" placeholder="Write your email draft here..."></textarea></td>
  <td><button class="email-button" disabled>Send Email</button></td>
</tr>"#,
        row_id = escape_html(&row_dom_id(&company.id)),
        hidden = if visible { "" } else { " hidden" },
        firm = escape_html(&company.firm_name),
        aum = or_na(company.aum.as_deref()),
        cell_id = escape_html(&website_cell_dom_id(&company.id)),
        website = render_website_cell(company, expanded),
        people = render_people(&company.people),
    )
}

/// Inner markup of the website-text cell.
#[must_use]
pub fn render_website_cell(company: &Company, expanded: bool) -> String {
    let Some(text) = company.website_text.as_deref() else {
        return "No content available".to_string();
    };
    if !is_truncatable(text) {
        return format!(r#"<div class="website-text-content"><p>{}</p></div>"#, escape_html(text));
    }

    let (shown, action, control) = if expanded {
        (escape_html(text), ACTION_COLLAPSE, "Show Less")
    } else {
        (
            escape_html(&truncate_text(text, TRUNCATE_AT)),
            ACTION_EXPAND,
            "Show More",
        )
    };
    format!(
        r#"<div class="website-text-content"><p>{shown}</p><button class="toggle-button" data-action="{action}" data-company-id="{id}">{control}</button></div>"#,
        id = escape_html(company.id.as_str()),
    )
}

#[must_use]
pub fn render_people(people: &[Person]) -> String {
    if people.is_empty() {
        return "No contacts available".to_string();
    }
    let mut out = String::from("<ul>");
    for person in people {
        out.push_str(&render_person(person));
    }
    out.push_str("</ul>");
    out
}

#[must_use]
pub fn render_person(person: &Person) -> String {
    let linkedin = match person.linkedin.as_deref() {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">Profile</a>"#,
            escape_html(url)
        ),
        None => "Not available".to_string(),
    };
    let confidence = person
        .confidence
        .map_or_else(|| NOT_APPLICABLE.to_string(), |c| c.to_string());

    format!(
        r#"<li><strong>Email:</strong> {email} <br><strong>Name:</strong> {name} <br><strong>Position:</strong> {position} <br><strong>Seniority:</strong> {seniority} <br><strong>Department:</strong> {department} <br><strong>LinkedIn:</strong> {linkedin} <br><strong>Confidence Level:</strong> {confidence}<hr class="separator"></li>"#,
        email = escape_html(&person.email),
        name = escape_html(&person.full_name()),
        position = or_na(person.position.as_deref()),
        seniority = or_na(person.seniority.as_deref()),
        department = or_na(person.department.as_deref()),
    )
}

fn or_na(value: Option<&str>) -> String {
    value.map_or_else(|| NOT_APPLICABLE.to_string(), escape_html)
}

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
