// ==========================================
// 仓储货位优化系统 - CSV 导入
// ==========================================
// 物品文件: name,frequency,size
// 订单文件: order_id,priority,item_name,quantity
//   同一订单号的多行合并为一个订单,按首次出现顺序输出
// 说明: 只做格式解析,取值范围由 API 层校验
// ==========================================

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Order, OrderPriority};
use crate::importer::error::{ImportError, ImportResult};

/// 物品导入记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub frequency: i32,
    pub size: i32,
}

impl ItemRecord {
    pub fn new(name: impl Into<String>, frequency: i32, size: i32) -> Self {
        Self {
            name: name.into(),
            frequency,
            size,
        }
    }
}

// ==========================================
// 文件入口
// ==========================================

/// 读取物品 CSV 文件
pub fn read_items_file(path: &Path) -> ImportResult<Vec<ItemRecord>> {
    let file = open_csv(path)?;
    let records = read_items(file)?;
    info!(path = %path.display(), count = records.len(), "物品文件读取完成");
    Ok(records)
}

/// 读取订单 CSV 文件
pub fn read_orders_file(path: &Path) -> ImportResult<Vec<Order>> {
    let file = open_csv(path)?;
    let orders = read_orders(file)?;
    info!(path = %path.display(), count = orders.len(), "订单文件读取完成");
    Ok(orders)
}

fn open_csv(path: &Path) -> ImportResult<File> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    if let Some(ext) = path.extension() {
        if !ext.eq_ignore_ascii_case("csv") {
            return Err(ImportError::UnsupportedFormat(
                ext.to_string_lossy().to_string(),
            ));
        }
    }
    File::open(path).map_err(|e| ImportError::CsvParseError(csv::Error::from(e)))
}

// ==========================================
// Reader 入口
// ==========================================

/// 从任意 Reader 解析物品记录
pub fn read_items<R: Read>(reader: R) -> ImportResult<Vec<ItemRecord>> {
    let mut reader = build_reader(reader);
    let columns = ColumnIndex::from_headers(reader.headers()?, &["name", "frequency", "size"])?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 2;
        if is_blank(&record) {
            continue;
        }

        let name = columns.required(&record, row, "name")?.to_string();
        let frequency = columns.parse::<i32>(&record, row, "frequency")?;
        let size = columns.parse::<i32>(&record, row, "size")?;

        debug!(row, name = %name, frequency, size, "解析物品行");
        records.push(ItemRecord {
            name,
            frequency,
            size,
        });
    }

    Ok(records)
}

/// 从任意 Reader 解析订单
pub fn read_orders<R: Read>(reader: R) -> ImportResult<Vec<Order>> {
    let mut reader = build_reader(reader);
    let columns = ColumnIndex::from_headers(
        reader.headers()?,
        &["order_id", "priority", "item_name", "quantity"],
    )?;

    let mut orders: Vec<Order> = Vec::new();
    let mut positions: HashMap<u32, usize> = HashMap::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 2;
        if is_blank(&record) {
            continue;
        }

        let order_id = columns.parse::<u32>(&record, row, "order_id")?;
        let priority_raw = columns.required(&record, row, "priority")?;
        let priority = parse_priority(priority_raw).ok_or_else(|| ImportError::InvalidPriority {
            row,
            value: priority_raw.to_string(),
        })?;
        let item_name = columns.required(&record, row, "item_name")?.to_string();
        let quantity = columns.parse::<u32>(&record, row, "quantity")?;

        match positions.get(&order_id) {
            Some(&pos) => {
                let order = &mut orders[pos];
                if order.priority != priority {
                    return Err(ImportError::PriorityConflict {
                        row,
                        order_id,
                        expected: order.priority.to_string(),
                    });
                }
                order.add_item(item_name, quantity);
            }
            None => {
                positions.insert(order_id, orders.len());
                orders.push(Order::new(order_id, priority).with_item(item_name, quantity));
            }
        }
    }

    Ok(orders)
}

/// 解析订单优先级 (不区分大小写)
pub fn parse_priority(value: &str) -> Option<OrderPriority> {
    match value.trim().to_ascii_uppercase().as_str() {
        "PRIME" | "P" => Some(OrderPriority::Prime),
        "REGULAR" | "R" => Some(OrderPriority::Regular),
        _ => None,
    }
}

// ==========================================
// 内部辅助
// ==========================================

fn build_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|v| v.is_empty())
}

/// 表头列名 -> 列序号
struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, required: &[&str]) -> ImportResult<Self> {
        let positions: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_ascii_lowercase(), i))
            .collect();

        for column in required {
            if !positions.contains_key(*column) {
                return Err(ImportError::MissingColumn(column.to_string()));
            }
        }
        Ok(Self { positions })
    }

    fn required<'r>(
        &self,
        record: &'r StringRecord,
        row: usize,
        field: &str,
    ) -> ImportResult<&'r str> {
        self.positions
            .get(field)
            .and_then(|&i| record.get(i))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ImportError::EmptyField {
                row,
                field: field.to_string(),
            })
    }

    fn parse<T>(&self, record: &StringRecord, row: usize, field: &str) -> ImportResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.required(record, row, field)?;
        raw.parse::<T>()
            .map_err(|e| ImportError::TypeConversionError {
                row,
                field: field.to_string(),
                message: format!("'{}': {}", raw, e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_items() {
        let data = "name,frequency,size\nLaptop,85,150\n  Mouse , 90 , 50\n,,\n";
        let items = read_items(data.as_bytes()).unwrap();
        assert_eq!(
            items,
            vec![
                ItemRecord::new("Laptop", 85, 150),
                ItemRecord::new("Mouse", 90, 50),
            ]
        );
    }

    #[test]
    fn test_read_items_reports_row_number() {
        let data = "name,frequency,size\nLaptop,85,150\nMouse,high,50\n";
        let err = read_items(data.as_bytes()).unwrap_err();
        match err {
            ImportError::TypeConversionError { row, field, .. } => {
                assert_eq!(row, 3);
                assert_eq!(field, "frequency");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_column() {
        let data = "name,size\nLaptop,150\n";
        let err = read_items(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn(ref c) if c == "frequency"));
    }

    #[test]
    fn test_read_orders_groups_by_first_seen() {
        let data = "order_id,priority,item_name,quantity\n\
                    7,regular,Printer,1\n\
                    2,PRIME,Keyboard,1\n\
                    7,Regular,Scanner,2\n";
        let orders = read_orders(data.as_bytes()).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, 7);
        assert_eq!(orders[0].items.len(), 2);
        assert_eq!(orders[0].items[1].item_name, "Scanner");
        assert_eq!(orders[0].items[1].quantity, 2);
        assert!(orders[1].is_prime());
    }

    #[test]
    fn test_priority_conflict() {
        let data = "order_id,priority,item_name,quantity\n1,prime,A,1\n1,regular,B,1\n";
        let err = read_orders(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ImportError::PriorityConflict { row: 3, order_id: 1, .. }
        ));
    }

    #[test]
    fn test_invalid_priority() {
        let data = "order_id,priority,item_name,quantity\n1,urgent,A,1\n";
        let err = read_orders(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::InvalidPriority { row: 2, .. }));
    }
}
