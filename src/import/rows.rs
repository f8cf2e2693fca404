use calamine::Data;

use super::{
    ColumnMap, OrderColumn, RowError, display_row,
    sheet::{cell_number, cell_text, is_blank},
};
use crate::models::{OrderDraft, UNPAID};

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Blank row, ignored without a trace.
    Skip,
    Draft(OrderDraft),
    Invalid(RowError),
}

/// Turn one data row into an order draft. `data_index` is the 0-based index of the row
/// below the header and is only used for error reporting.
pub fn normalize_row(columns: &ColumnMap, data_index: usize, row: &[Data]) -> RowOutcome {
    if row.iter().all(is_blank) {
        return RowOutcome::Skip;
    }

    let text = |column| columns.cell(row, column).map(cell_text).unwrap_or_default();
    let number = |column| columns.cell(row, column).map(cell_number).unwrap_or(0.0);

    let order_number = text(OrderColumn::OrderNumber);
    let customer_name = text(OrderColumn::CustomerName);
    if order_number.is_empty() || customer_name.is_empty() {
        return RowOutcome::Invalid(RowError::Validation {
            row: display_row(data_index),
        });
    }

    let payment_status = match text(OrderColumn::PaymentStatus) {
        status if status.is_empty() => UNPAID.to_string(),
        status => status,
    };

    RowOutcome::Draft(OrderDraft {
        order_number,
        customer_name,
        weight: number(OrderColumn::Weight),
        unit_price: number(OrderColumn::UnitPrice),
        shipping_fee: number(OrderColumn::ShippingFee),
        payment_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    fn columns() -> ColumnMap {
        ColumnMap::resolve(&[
            s("单号"),
            s("客户姓名"),
            s("重量(kg)"),
            s("单价"),
            s("运费"),
            s("付款状态"),
        ])
        .unwrap()
    }

    #[test]
    fn normalizes_a_complete_row() {
        let row = [
            s(" LG001 "),
            s("Alice"),
            Data::Float(10.0),
            Data::Int(5),
            s("50"),
            s("已付款"),
        ];

        let outcome = normalize_row(&columns(), 0, &row);

        assert_eq!(
            outcome,
            RowOutcome::Draft(OrderDraft {
                order_number: "LG001".into(),
                customer_name: "Alice".into(),
                weight: 10.0,
                unit_price: 5.0,
                shipping_fee: 50.0,
                payment_status: "已付款".into(),
            })
        );
    }

    #[test]
    fn blank_rows_are_skipped() {
        assert_eq!(normalize_row(&columns(), 3, &[]), RowOutcome::Skip);
        let blank = [Data::Empty, s("  "), Data::Empty];
        assert_eq!(normalize_row(&columns(), 3, &blank), RowOutcome::Skip);
    }

    #[test]
    fn missing_order_number_reports_display_row() {
        let row = [Data::Empty, s("Bob"), Data::Float(1.0)];
        assert_eq!(
            normalize_row(&columns(), 4, &row),
            RowOutcome::Invalid(RowError::Validation { row: 6 })
        );
    }

    #[test]
    fn missing_customer_name_is_invalid() {
        let row = [s("LG002"), s("   ")];
        let outcome = normalize_row(&columns(), 0, &row);
        let RowOutcome::Invalid(err) = outcome else {
            panic!("expected invalid row, got {outcome:?}");
        };
        assert_eq!(
            err.to_string(),
            "row 2: order number or customer name must not be empty"
        );
    }

    #[test]
    fn bad_numbers_default_to_zero() {
        let row = [s("LG003"), s("Carol"), s("abc"), Data::Empty];
        let RowOutcome::Draft(draft) = normalize_row(&columns(), 0, &row) else {
            panic!("expected a draft");
        };
        assert_eq!(draft.weight, 0.0);
        assert_eq!(draft.unit_price, 0.0);
        assert_eq!(draft.shipping_fee, 0.0);
    }

    #[test]
    fn blank_payment_status_defaults_to_unpaid() {
        let row = [s("LG004"), s("Dan"), Data::Float(1.0), Data::Float(2.0), Data::Float(3.0), s(" ")];
        let RowOutcome::Draft(draft) = normalize_row(&columns(), 0, &row) else {
            panic!("expected a draft");
        };
        assert_eq!(draft.payment_status, "未付款");
    }

    #[test]
    fn unknown_payment_status_is_kept_verbatim() {
        let row = [s("LG005"), s("Eve"), Data::Empty, Data::Empty, Data::Empty, s(" 待确认 ")];
        let RowOutcome::Draft(draft) = normalize_row(&columns(), 0, &row) else {
            panic!("expected a draft");
        };
        assert_eq!(draft.payment_status, "待确认");
    }

    #[test]
    fn numeric_order_numbers_become_text() {
        let row = [Data::Float(20240001.0), s("Fay")];
        let RowOutcome::Draft(draft) = normalize_row(&columns(), 0, &row) else {
            panic!("expected a draft");
        };
        assert_eq!(draft.order_number, "20240001");
    }
}
