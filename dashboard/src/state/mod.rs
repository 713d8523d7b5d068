//! Reusable List-Filter-Paginate-Mutate state machinery
//!
//! Every tab composes the same pieces: a [`FilterState`] that resets
//! the page on any filter change, a [`ListCore`] holding the current
//! page of records with stale-load protection, a [`ModalState`] tagged
//! union so at most one modal can be open, a [`SubmitState`] machine
//! for mutations, and a [`RefreshSignal`] as the cache-invalidation
//! handshake between mutations and the data fetcher.

mod filters;
mod list;
mod modal;
mod pagination;
mod submit;

pub use filters::FilterState;
pub use list::{EmptyKind, ListCore, LoadState, RefreshSignal};
pub use modal::ModalState;
pub use pagination::{page_controls, page_window, PageControls};
pub use submit::SubmitState;
