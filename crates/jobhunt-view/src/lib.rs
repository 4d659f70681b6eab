//! The company directory view.
//!
//! All view state lives in [`DirectoryView`] and every piece of markup comes
//! from [`render`]; the browser bindings in `app` (built for `wasm32` only)
//! just route DOM events into the state and write the re-rendered fragments
//! back. Build the browser module with:
//!
//! ```text
//! wasm-pack build crates/jobhunt-view --target web --out-dir ../../static/pkg
//! ```

pub mod filter;
pub mod render;
pub mod state;
pub mod text;

#[cfg(target_arch = "wasm32")]
mod app;

pub use filter::{filter_companies, matches_query};
pub use state::{DirectoryView, RowAction, Theme};
pub use text::{truncate_text, TRUNCATE_AT};

/// Path of the listing endpoint the view loads from.
pub const COMPANIES_PATH: &str = "/api/companies";
