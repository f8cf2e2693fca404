use calamine::Data;

use super::{ImportError, sheet::cell_text};

/// Columns an order spreadsheet must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderColumn {
    OrderNumber,
    CustomerName,
    Weight,
    UnitPrice,
    ShippingFee,
    PaymentStatus,
}

impl OrderColumn {
    pub const ALL: [OrderColumn; 6] = [
        OrderColumn::OrderNumber,
        OrderColumn::CustomerName,
        OrderColumn::Weight,
        OrderColumn::UnitPrice,
        OrderColumn::ShippingFee,
        OrderColumn::PaymentStatus,
    ];

    pub fn header(self) -> &'static str {
        match self {
            OrderColumn::OrderNumber => "单号",
            OrderColumn::CustomerName => "客户姓名",
            OrderColumn::Weight => "重量",
            OrderColumn::UnitPrice => "单价",
            OrderColumn::ShippingFee => "运费",
            OrderColumn::PaymentStatus => "付款状态",
        }
    }

    /// Header text before any unit annotation such as `(kg)`.
    pub fn base_name(self) -> &'static str {
        base_name(self.header())
    }
}

fn base_name(header: &str) -> &str {
    header
        .split(['(', '（'])
        .next()
        .unwrap_or(header)
        .trim()
}

/// Position of every required column in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    indexes: [usize; 6],
}

impl ColumnMap {
    /// Match each required column against the header row. A header cell matches when its
    /// text contains the column's base name; the leftmost match wins.
    pub fn resolve(headers: &[Data]) -> Result<Self, ImportError> {
        let texts: Vec<String> = headers.iter().map(cell_text).collect();

        let mut indexes = [0usize; 6];
        let mut missing = Vec::new();
        for column in OrderColumn::ALL {
            let needle = column.base_name();
            match texts.iter().position(|text| !text.is_empty() && text.contains(needle)) {
                Some(index) => indexes[column as usize] = index,
                None => missing.push(column.header()),
            }
        }

        if !missing.is_empty() {
            return Err(ImportError::MissingColumns(missing));
        }
        Ok(Self { indexes })
    }

    pub fn index_of(&self, column: OrderColumn) -> usize {
        self.indexes[column as usize]
    }

    /// The cell for `column` in `row`, if the row is long enough to have one.
    pub fn cell<'a>(&self, row: &'a [Data], column: OrderColumn) -> Option<&'a Data> {
        row.get(self.index_of(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<Data> {
        names.iter().map(|n| Data::String(n.to_string())).collect()
    }

    #[test]
    fn resolves_exact_headers_in_order() {
        let map = ColumnMap::resolve(&headers(&[
            "单号", "客户姓名", "重量", "单价", "运费", "付款状态",
        ]))
        .unwrap();

        for (i, column) in OrderColumn::ALL.iter().enumerate() {
            assert_eq!(map.index_of(*column), i);
        }
    }

    #[test]
    fn matches_by_substring_in_any_order() {
        let map = ColumnMap::resolve(&headers(&[
            "付款状态说明",
            "运费(元)",
            "订单单号",
            "重量(kg)",
            "客户姓名/收件人",
            "单价（元/kg）",
        ]))
        .unwrap();

        assert_eq!(map.index_of(OrderColumn::PaymentStatus), 0);
        assert_eq!(map.index_of(OrderColumn::ShippingFee), 1);
        assert_eq!(map.index_of(OrderColumn::OrderNumber), 2);
        assert_eq!(map.index_of(OrderColumn::Weight), 3);
        assert_eq!(map.index_of(OrderColumn::CustomerName), 4);
        assert_eq!(map.index_of(OrderColumn::UnitPrice), 5);
    }

    #[test]
    fn first_matching_header_wins() {
        let map = ColumnMap::resolve(&headers(&[
            "单号", "客户姓名", "重量", "毛重量", "单价", "运费", "付款状态",
        ]))
        .unwrap();
        assert_eq!(map.index_of(OrderColumn::Weight), 2);
    }

    #[test]
    fn skips_blank_and_numeric_header_cells() {
        let mut row = vec![Data::Empty, Data::Float(3.0)];
        row.extend(headers(&["单号", "客户姓名", "重量", "单价", "运费", "付款状态"]));
        let map = ColumnMap::resolve(&row).unwrap();
        assert_eq!(map.index_of(OrderColumn::OrderNumber), 2);
    }

    #[test]
    fn reports_every_missing_column() {
        let err = ColumnMap::resolve(&headers(&["单号", "客户姓名", "单价", "付款状态"]))
            .unwrap_err();
        match err {
            ImportError::MissingColumns(missing) => assert_eq!(missing, vec!["重量", "运费"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_header_row_misses_everything() {
        let err = ColumnMap::resolve(&[]).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumns(ref m) if m.len() == 6));
        assert_eq!(
            err.to_string(),
            "missing required column(s): 单号, 客户姓名, 重量, 单价, 运费, 付款状态"
        );
    }

    #[test]
    fn base_name_drops_unit_suffix() {
        assert_eq!(base_name("重量(kg)"), "重量");
        assert_eq!(base_name("单价（元）"), "单价");
        assert_eq!(base_name("运费"), "运费");
    }

    #[test]
    fn cell_is_none_for_short_rows() {
        let map = ColumnMap::resolve(&headers(&[
            "单号", "客户姓名", "重量", "单价", "运费", "付款状态",
        ]))
        .unwrap();
        let row = vec![Data::String("LG1".into())];
        assert!(map.cell(&row, OrderColumn::OrderNumber).is_some());
        assert!(map.cell(&row, OrderColumn::PaymentStatus).is_none());
    }
}
