use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    db::OrmConn,
    entity::orders::{Column as OrderCol, Entity as Orders, Model as OrderModel},
    error::{AppError, AppResult},
    models::{Order, PaymentState},
};

/// Look an order up by its number. When the number occurs more than once the most
/// recently created row is returned.
pub async fn find_by_order_number(orm: &OrmConn, order_number: Option<&str>) -> AppResult<Order> {
    let order_number = order_number
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("orderNumber is required".into()))?;

    let order = Orders::find()
        .filter(OrderCol::OrderNumber.eq(order_number))
        .order_by_desc(OrderCol::CreatedAt)
        .one(orm)
        .await?;

    match order {
        Some(o) => Ok(order_from_entity(o)),
        None => Err(AppError::NotFound),
    }
}

pub fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        payment_state: PaymentState::classify(&model.payment_status),
        order_number: model.order_number,
        customer_name: model.customer_name,
        weight: model.weight,
        unit_price: model.unit_price,
        shipping_fee: model.shipping_fee,
        payment_status: model.payment_status,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
