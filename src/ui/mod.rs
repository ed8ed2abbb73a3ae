//! Client-side presentation state: the business form, the dashboard view
//! model and the state machine that moves between them.

pub mod app;
pub mod form;
pub mod view;

pub use app::{Busy, Dashboard, Phase, REGENERATE_FAILED, SUBMIT_FAILED};
pub use form::{Field, FieldErrors, FormState};
pub use view::{DashboardView, StarFill};
