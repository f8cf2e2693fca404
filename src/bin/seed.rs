use logistics_orders::{
    config::AppConfig,
    db::{create_pool, orm_from_pool, run_migrations},
    models::{OrderDraft, PAID, PARTIALLY_PAID, UNPAID},
    services::import_service::upsert_order,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;
    let orm = orm_from_pool(pool);

    let orders = [
        ("LG2024001", "张三", 12.5, 18.0, 225.0, PAID),
        ("LG2024002", "李四", 3.2, 20.0, 64.0, UNPAID),
        ("LG2024003", "王五", 40.0, 15.0, 600.0, PARTIALLY_PAID),
    ];

    for (order_number, customer_name, weight, unit_price, shipping_fee, payment_status) in orders {
        let draft = OrderDraft {
            order_number: order_number.into(),
            customer_name: customer_name.into(),
            weight,
            unit_price,
            shipping_fee,
            payment_status: payment_status.into(),
        };
        let outcome = upsert_order(&orm, &draft).await?;
        println!("{order_number}: {outcome:?}");
    }

    println!("Seed completed");
    Ok(())
}
