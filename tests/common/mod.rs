#![allow(dead_code)]

use std::sync::Arc;

use logistics_orders::{
    analysis::UnconfiguredAnalyzer,
    credentials::StaticCredentials,
    entity::{AuditLogs, Orders},
    session::SessionGuard,
    state::AppState,
};
use rust_xlsxwriter::Workbook;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, Schema};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "logistics2024";
pub const SESSION_SECRET: &[u8] = b"test-session-secret-0123456789";
pub const BOUNDARY: &str = "----logistics-test-boundary";

/// Fresh in-memory database with the schema built from the entities.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let orm = Database::connect(opts).await?;

    let backend = orm.get_database_backend();
    let schema = Schema::new(backend);
    orm.execute(backend.build(&schema.create_table_from_entity(Orders)))
        .await?;
    orm.execute(backend.build(&schema.create_table_from_entity(AuditLogs)))
        .await?;

    let credentials = StaticCredentials::new(ADMIN_USER, ADMIN_PASSWORD)?;
    Ok(AppState {
        orm,
        sessions: Arc::new(SessionGuard::new(Arc::new(credentials), SESSION_SECRET)),
        analyzer: Arc::new(UnconfiguredAnalyzer),
        cookie_secure: false,
    })
}

pub enum Cell {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub fn header_row() -> Vec<Cell> {
    ["单号", "客户姓名", "重量(kg)", "单价", "运费", "付款状态"]
        .into_iter()
        .map(Cell::Text)
        .collect()
}

pub fn order_row(
    order_number: &'static str,
    customer: &'static str,
    weight: f64,
    unit_price: f64,
    shipping_fee: f64,
    status: Option<&'static str>,
) -> Vec<Cell> {
    vec![
        Cell::Text(order_number),
        Cell::Text(customer),
        Cell::Number(weight),
        Cell::Number(unit_price),
        Cell::Number(shipping_fee),
        status.map(Cell::Text).unwrap_or(Cell::Blank),
    ]
}

/// Build an xlsx file with a single sheet holding `rows`.
pub fn workbook(rows: &[Vec<Cell>]) -> anyhow::Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    sheet.write_string(r as u32, c as u16, *text)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(r as u32, c as u16, *n)?;
                }
                Cell::Blank => {}
            }
        }
    }
    Ok(workbook.save_to_buffer()?)
}

/// The two-row sheet used throughout the import tests.
pub fn sample_workbook() -> anyhow::Result<Vec<u8>> {
    workbook(&[
        header_row(),
        order_row("LG001", "Alice", 10.0, 5.0, 50.0, Some("已付款")),
        order_row("LG002", "Bob", 20.0, 5.0, 100.0, None),
    ])
}

/// A multipart body with one file part. Returns the content type and the body.
pub fn multipart_file(field: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
