//! Client-side counterpart of the HTTP API: a timeout-bounded data-access
//! layer with offline fallbacks, the state store the pages render from, and
//! the admin panel state machine.

pub mod api;
pub mod fallback;
pub mod panel;
pub mod store;

pub use api::{ApiClient, BlogDraft, ClientError, ExperienceDraft, FetchOutcome, LandingData};
pub use panel::PanelState;
pub use store::{ConnectionReport, ConnectionStatus, PortfolioStore};
