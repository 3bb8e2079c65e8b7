//! Headless state for the frontend pages.
//!
//! Each view owns its UI state and talks to a [`RecipeSource`](crate::RecipeSource);
//! rendering is left to whatever front end drives it.

pub mod browse;
pub mod detail;
pub mod form;
pub mod messages;

#[cfg(test)]
mod testing;

pub use browse::{BrowseMode, BrowseView, FetchTicket};
pub use detail::DetailView;
pub use form::{FormError, FormMode, FormView, RecipeForm};
