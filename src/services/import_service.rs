use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
    prelude::DateTimeWithTimeZone, sea_query::Expr,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    entity::orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders},
    error::{AppError, AppResult},
    import::{ColumnMap, Grid, ImportError, RowError, RowOutcome, normalize_row, read_first_sheet},
    models::OrderDraft,
    response::ImportSummary,
    state::AppState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Result of one import run.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub count: usize,
    pub errors: Vec<RowError>,
}

impl From<ImportReport> for ImportSummary {
    fn from(report: ImportReport) -> Self {
        let errors = (!report.errors.is_empty())
            .then(|| report.errors.iter().map(ToString::to_string).collect());
        ImportSummary {
            count: report.count,
            errors,
        }
    }
}

/// Parse an uploaded workbook and upsert every order it holds.
pub async fn import_workbook(
    state: &AppState,
    actor: &str,
    bytes: Vec<u8>,
) -> AppResult<ImportSummary> {
    let size = bytes.len();
    let grid = tokio::task::spawn_blocking(move || read_first_sheet(bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))??;

    tracing::info!(actor, bytes = size, rows = grid.len(), "order import started");
    let report = import_grid(&state.orm, &grid).await?;
    tracing::info!(
        actor,
        count = report.count,
        errors = report.errors.len(),
        "order import finished"
    );

    if let Err(err) = log_audit(
        &state.orm,
        Some(actor),
        "orders_import",
        Some("orders"),
        Some(serde_json::json!({
            "count": report.count,
            "errors": report.errors.len(),
        })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(report.into())
}

/// Import an already parsed grid. Rows are written one after another so a later row
/// observes what an earlier row with the same order number wrote.
pub async fn import_grid<C>(conn: &C, grid: &Grid) -> Result<ImportReport, ImportError>
where
    C: ConnectionTrait,
{
    let Some((headers, rows)) = grid.split_first() else {
        return Err(ImportError::NoDataRows);
    };
    if rows.is_empty() {
        return Err(ImportError::NoDataRows);
    }
    let columns = ColumnMap::resolve(headers)?;

    let mut report = ImportReport::default();
    for (index, row) in rows.iter().enumerate() {
        let draft = match normalize_row(&columns, index, row) {
            RowOutcome::Skip => continue,
            RowOutcome::Invalid(err) => {
                tracing::warn!(error = %err, "row rejected");
                report.errors.push(err);
                continue;
            }
            RowOutcome::Draft(draft) => draft,
        };

        match upsert_order(conn, &draft).await {
            Ok(outcome) => {
                tracing::debug!(order_number = %draft.order_number, ?outcome, "order saved");
                report.count += 1;
            }
            Err(err) => {
                let err = RowError::Persistence {
                    row: crate::import::display_row(index),
                    order_number: draft.order_number,
                    reason: err.to_string(),
                };
                tracing::warn!(error = %err, "row failed");
                report.errors.push(err);
            }
        }
    }

    Ok(report)
}

/// Update every order carrying the draft's order number, or insert a new one when there
/// is none. `order_number` and `created_at` of existing rows are never touched.
pub async fn upsert_order<C>(conn: &C, draft: &OrderDraft) -> Result<UpsertOutcome, DbErr>
where
    C: ConnectionTrait,
{
    let now: DateTimeWithTimeZone = Utc::now().into();

    let existing = Orders::find()
        .filter(OrderCol::OrderNumber.eq(draft.order_number.as_str()))
        .one(conn)
        .await?;

    if existing.is_some() {
        Orders::update_many()
            .col_expr(OrderCol::CustomerName, Expr::value(draft.customer_name.clone()))
            .col_expr(OrderCol::Weight, Expr::value(draft.weight))
            .col_expr(OrderCol::UnitPrice, Expr::value(draft.unit_price))
            .col_expr(OrderCol::ShippingFee, Expr::value(draft.shipping_fee))
            .col_expr(OrderCol::PaymentStatus, Expr::value(draft.payment_status.clone()))
            .col_expr(OrderCol::UpdatedAt, Expr::value(now))
            .filter(OrderCol::OrderNumber.eq(draft.order_number.as_str()))
            .exec(conn)
            .await?;
        return Ok(UpsertOutcome::Updated);
    }

    OrderActive {
        id: Set(Uuid::new_v4()),
        order_number: Set(draft.order_number.clone()),
        customer_name: Set(draft.customer_name.clone()),
        weight: Set(draft.weight),
        unit_price: Set(draft.unit_price),
        shipping_fee: Set(draft.shipping_fee),
        payment_status: Set(draft.payment_status.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await?;

    Ok(UpsertOutcome::Inserted)
}
