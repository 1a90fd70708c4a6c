use tracing::{info, instrument};

use vital_view_data::repository::VitalSignsRepositoryTrait;
use vital_view_domain::entities::HistoryFilter;
use vital_view_domain::services::VitalSignsService;

use crate::entities::{HistoryRow, ListResponse};

/// History table, newest first
#[instrument(skip(service))]
pub fn list_history<R: VitalSignsRepositoryTrait>(
    service: &VitalSignsService<R>,
    filter: HistoryFilter,
) -> ListResponse<HistoryRow, HistoryFilter> {
    let rows: Vec<HistoryRow> = service
        .filter_history(&filter)
        .into_iter()
        .map(HistoryRow::from)
        .collect();
    info!(rows = rows.len(), "History listed");
    ListResponse::new(rows, filter)
}
