// ==========================================
// 仓储货位优化系统 - 导入层
// ==========================================
// 职责: CSV 物品/订单文件解析,内置示例数据
// ==========================================

pub mod csv_importer;
pub mod error;
pub mod sample;

pub use csv_importer::{
    parse_priority, read_items, read_items_file, read_orders, read_orders_file, ItemRecord,
};
pub use error::{ImportError, ImportResult};
pub use sample::{sample_items, sample_orders};
