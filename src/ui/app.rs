use crate::client::BusinessApi;
use crate::models::BusinessData;
use crate::ui::form::FormState;
use crate::ui::view::DashboardView;
use tracing::error;

pub const SUBMIT_FAILED: &str = "Failed to fetch business data. Please try again.";
pub const REGENERATE_FAILED: &str = "Failed to regenerate headline. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Loading,
    Loaded,
    RegeneratingHeadline,
}

/// An action was requested from a phase that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("action not available while {0:?}")]
pub struct Busy(pub Phase);

/// Root of the client: the form until data arrives, the dashboard after.
#[derive(Debug, Clone)]
pub struct Dashboard {
    phase: Phase,
    pub form: FormState,
    data: Option<BusinessData>,
    /// Banner shown above the form.
    error: Option<String>,
    /// Banner shown inside the dashboard.
    headline_error: Option<String>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            phase: Phase::Empty,
            form: FormState::new(),
            data: None,
            error: None,
            headline_error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn data(&self) -> Option<&BusinessData> {
        self.data.as_ref()
    }

    pub fn view(&self) -> Option<DashboardView> {
        self.data.as_ref().map(DashboardView::from)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn headline_error(&self) -> Option<&str> {
        self.headline_error.as_deref()
    }

    /// Validate the form and submit it. Returns `Ok(false)` when validation
    /// failed and nothing was sent.
    pub async fn submit<A: BusinessApi>(&mut self, api: &A) -> Result<bool, Busy> {
        if self.phase != Phase::Empty {
            return Err(Busy(self.phase));
        }
        let Some(form_data) = self.form.validate() else {
            return Ok(false);
        };

        let mut flight = InFlight::begin(self, Phase::Loading);
        flight.dashboard.error = None;

        match api.submit_business_data(&form_data).await {
            Ok(data) => {
                flight.dashboard.data = Some(data);
                flight.dashboard.headline_error = None;
                flight.dashboard.phase = Phase::Loaded;
            }
            Err(e) => {
                error!(error = %e, "Error submitting form");
                flight.dashboard.error = Some(SUBMIT_FAILED.to_string());
            }
        }
        Ok(true)
    }

    /// Fetch a new headline for the displayed business. Rating and review
    /// count are kept whether or not the call succeeds.
    pub async fn regenerate<A: BusinessApi>(&mut self, api: &A) -> Result<(), Busy> {
        if self.phase != Phase::Loaded {
            return Err(Busy(self.phase));
        }
        let Some(data) = self.data.as_ref() else {
            return Err(Busy(self.phase));
        };
        let (name, location) = (data.name.clone(), data.location.clone());

        let mut flight = InFlight::begin(self, Phase::RegeneratingHeadline);
        flight.dashboard.headline_error = None;

        match api.regenerate_headline(&name, &location).await {
            Ok(update) => {
                if let Some(data) = flight.dashboard.data.as_mut() {
                    data.merge_headline(update);
                }
            }
            Err(e) => {
                error!(error = %e, "Error regenerating headline");
                flight.dashboard.headline_error = Some(REGENERATE_FAILED.to_string());
            }
        }
        Ok(())
    }

    /// Discard the dashboard and return to a fresh form.
    pub fn reset(&mut self) -> Result<(), Busy> {
        if self.phase != Phase::Loaded {
            return Err(Busy(self.phase));
        }
        *self = Self::new();
        Ok(())
    }
}

/// Holds the dashboard in a busy phase for one request. Dropping it, whether
/// the request finished or its future was cancelled, re-enables the form and
/// falls back to the phase the action started from unless a new stable phase
/// was committed.
struct InFlight<'a> {
    dashboard: &'a mut Dashboard,
    busy: Phase,
    stable: Phase,
}

impl<'a> InFlight<'a> {
    fn begin(dashboard: &'a mut Dashboard, busy: Phase) -> Self {
        let stable = dashboard.phase;
        dashboard.phase = busy;
        dashboard.form.disabled = busy == Phase::Loading;
        Self {
            dashboard,
            busy,
            stable,
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.dashboard.form.disabled = false;
        if self.dashboard.phase == self.busy {
            self.dashboard.phase = self.stable;
        }
    }
}
