mod common;

use chrono::{Duration, Utc};
use common::setup_state;
use logistics_orders::{
    entity::orders::ActiveModel as OrderActive,
    error::AppError,
    models::PaymentState,
    services::order_service::find_by_order_number,
    state::AppState,
};
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

async fn insert_order(
    state: &AppState,
    order_number: &str,
    customer_name: &str,
    created_hours_ago: i64,
) -> anyhow::Result<Uuid> {
    let created = Utc::now() - Duration::hours(created_hours_ago);
    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        order_number: Set(order_number.into()),
        customer_name: Set(customer_name.into()),
        weight: Set(1.0),
        unit_price: Set(2.0),
        shipping_fee: Set(3.0),
        payment_status: Set("paid".into()),
        created_at: Set(created.into()),
        updated_at: Set(created.into()),
    }
    .insert(&state.orm)
    .await?;
    Ok(order.id)
}

#[tokio::test]
async fn duplicates_resolve_to_most_recently_created() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_order(&state, "LG100", "Older", 5).await?;
    let newest = insert_order(&state, "LG100", "Newer", 1).await?;
    insert_order(&state, "LG100", "Oldest", 48).await?;

    let order = find_by_order_number(&state.orm, Some("LG100")).await?;

    assert_eq!(order.id, newest);
    assert_eq!(order.customer_name, "Newer");
    assert_eq!(order.payment_state, PaymentState::Paid);
    Ok(())
}

#[tokio::test]
async fn unknown_number_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_order(&state, "LG200", "Someone", 0).await?;

    let err = find_by_order_number(&state.orm, Some("LG201")).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn match_is_exact_not_prefix() -> anyhow::Result<()> {
    let state = setup_state().await?;
    insert_order(&state, "LG3000", "Someone", 0).await?;

    let err = find_by_order_number(&state.orm, Some("LG300")).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn blank_or_missing_number_is_rejected_before_querying() -> anyhow::Result<()> {
    let state = setup_state().await?;

    for input in [None, Some(""), Some("   ")] {
        let err = find_by_order_number(&state.orm, input).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)), "input {input:?}");
    }
    Ok(())
}
