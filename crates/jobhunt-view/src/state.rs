use jobhunt_core::{Company, CompanyId};

use crate::filter::filter_companies;
use crate::render::{ACTION_COLLAPSE, ACTION_EXPAND};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }
}

/// A Show More / Show Less press on one row's website cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Expand,
    Collapse,
}

impl RowAction {
    /// Parse the `data-action` attribute written by the renderer.
    #[must_use]
    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw {
            ACTION_EXPAND => Some(Self::Expand),
            ACTION_COLLAPSE => Some(Self::Collapse),
            _ => None,
        }
    }
}

/// Interaction state of the directory page.
///
/// Holds the last successfully loaded company list plus the search text, the
/// theme flag and the single expanded row. Nothing here survives a reload.
#[derive(Debug, Clone, Default)]
pub struct DirectoryView {
    companies: Vec<Company>,
    search: String,
    dark_mode: bool,
    expanded: Option<CompanyId>,
}

impl DirectoryView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held list with a fresh load.
    ///
    /// An expanded row that is not part of the new list is collapsed.
    pub fn load_succeeded(&mut self, companies: Vec<Company>) {
        self.companies = companies;
        if let Some(id) = &self.expanded {
            if self.company(id).is_none() {
                self.expanded = None;
            }
        }
    }

    #[must_use]
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    #[must_use]
    pub fn company(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| &c.id == id)
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Rows to show for the current search, recomputed on every call.
    #[must_use]
    pub fn visible_companies(&self) -> Vec<&Company> {
        filter_companies(&self.companies, &self.search)
    }

    /// Every held company in list order, paired with whether the current
    /// search shows it.
    #[must_use]
    pub fn row_visibility(&self) -> Vec<(&Company, bool)> {
        let mut visible = self.visible_companies().into_iter().peekable();
        self.companies
            .iter()
            .map(|company| {
                let shown = visible
                    .next_if(|candidate| std::ptr::eq(*candidate, company))
                    .is_some();
                (company, shown)
            })
            .collect()
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&CompanyId> {
        self.expanded.as_ref()
    }

    #[must_use]
    pub fn is_expanded(&self, id: &CompanyId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Expand one row's website text, collapsing whichever row was open.
    pub fn expand(&mut self, id: CompanyId) {
        self.expanded = Some(id);
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Apply a row action and return the rows whose website cell must be
    /// re-rendered: the previously expanded row, if any, then `id`.
    ///
    /// An action on a row that is not held changes nothing.
    pub fn apply_action(&mut self, action: RowAction, id: &CompanyId) -> Vec<CompanyId> {
        if self.company(id).is_none() {
            return Vec::new();
        }
        let mut changed: Vec<CompanyId> = self.expanded.take().into_iter().collect();
        if action == RowAction::Expand {
            self.expand(id.clone());
        }
        if !changed.contains(id) {
            changed.push(id.clone());
        }
        changed
    }
}
