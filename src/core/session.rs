//! Snapshot + filter state of one dashboard, with stale-result dropping.

use crate::core::logic::{Core, ViewOptions};
use crate::core::scope::ScopeSet;
use crate::errors::AppResult;
use crate::models::filter::FilterState;
use crate::models::shift::ShiftRecord;
use crate::models::summary::DashboardView;

/// Handle for a recomputation requested at a given generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    state: FilterState,
}

impl Ticket {
    pub fn state(&self) -> &FilterState {
        &self.state
    }
}

pub struct DashboardSession {
    scopes: ScopeSet,
    options: ViewOptions,
    snapshot: Option<Vec<ShiftRecord>>,
    state: FilterState,
    generation: u64,
    view: DashboardView,
}

impl DashboardSession {
    pub fn new(scopes: ScopeSet, options: ViewOptions, initial: FilterState) -> Self {
        Self {
            scopes,
            options,
            snapshot: None,
            state: initial,
            generation: 0,
            view: DashboardView::NotLoaded,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Replace the snapshot with a freshly loaded record set and re-render.
    pub fn load(&mut self, records: Vec<ShiftRecord>) -> AppResult<&DashboardView> {
        self.snapshot = Some(records);
        let ticket = self.request(self.state.clone());
        let view = self.compute(&ticket)?;
        self.commit(&ticket, view);
        Ok(&self.view)
    }

    /// Replace the filter state; any ticket issued before becomes stale.
    pub fn request(&mut self, state: FilterState) -> Ticket {
        self.generation += 1;
        self.state = state;
        Ticket {
            generation: self.generation,
            state: self.state.clone(),
        }
    }

    /// Render the view for a ticket. Pure with respect to the session.
    pub fn compute(&self, ticket: &Ticket) -> AppResult<DashboardView> {
        match &self.snapshot {
            None => Ok(DashboardView::NotLoaded),
            Some(records) => Core::build_view(records, &ticket.state, &self.scopes, &self.options),
        }
    }

    /// Keep `view` only if no newer request was made; returns whether it
    /// was applied.
    pub fn commit(&mut self, ticket: &Ticket, view: DashboardView) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "dropping stale view (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.view = view;
        true
    }

    /// Request, compute and commit in one go.
    pub fn set_filter(&mut self, state: FilterState) -> AppResult<&DashboardView> {
        let ticket = self.request(state);
        let view = self.compute(&ticket)?;
        self.commit(&ticket, view);
        Ok(&self.view)
    }

    /// Query string to persist for the current state.
    pub fn query(&self) -> String {
        self.state.to_query()
    }
}
