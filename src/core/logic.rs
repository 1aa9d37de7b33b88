use crate::core::aggregate;
use crate::core::filter;
use crate::core::scope::ScopeSet;
use crate::errors::AppResult;
use crate::models::filter::FilterState;
use crate::models::shift::ShiftRecord;
use crate::models::summary::{DashboardView, Granularity, Metric, ViewData};

/// Knobs of a rendered view that do not belong to the filter state.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub metric: Metric,
    pub granularity: Granularity,
    pub recent_limit: usize,
    pub self_marker: String,
}

pub struct Core;

impl Core {
    /// Filter, then derive summary, series and recent list for one state.
    pub fn build_view(
        records: &[ShiftRecord],
        state: &FilterState,
        scopes: &ScopeSet,
        opts: &ViewOptions,
    ) -> AppResult<DashboardView> {
        let scope_def = scopes.get(&state.scope)?;

        let scoped = filter::in_scope(records, scope_def);
        let months = filter::available_months(&scoped);
        let event_types = filter::available_event_types(&scoped);

        let visible = filter::apply(records, state, scope_def);
        if visible.is_empty() {
            return Ok(DashboardView::Empty {
                months,
                event_types,
            });
        }

        let summary = aggregate::summarize(&visible, &opts.self_marker);
        let series = aggregate::bucket_series(
            &visible,
            opts.metric,
            opts.granularity,
            state.month.as_option(),
        );
        let recent = aggregate::recent(&visible, opts.recent_limit)
            .into_iter()
            .cloned()
            .collect();

        Ok(DashboardView::Ready(ViewData {
            summary,
            series,
            recent,
            months,
            event_types,
        }))
    }
}
