// ==========================================
// 仓储货位优化系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、报告结构
// 红线: 不含引擎逻辑
// ==========================================

pub mod action_log;
pub mod item;
pub mod location;
pub mod order;
pub mod report;
pub mod shelf;
pub mod types;

// 重导出核心类型
pub use action_log::{ActionLog, ActionType};
pub use item::{Item, ItemId};
pub use location::{coordinate_label, Location};
pub use order::{Order, OrderItem};
pub use report::{
    FrequencyChange, FulfillmentReport, InventoryRow, ItemPlacement, PathSegment, PickLine,
    ProcessOutcome, QueueStatus, RebalanceReport, RelocationFailure, RelocationMove,
    ZoneOccupancy, ZoneSummary,
};
pub use shelf::{Shelf, ShelfId, ShelfOccupant, DEFAULT_SHELF_CAPACITY};
pub use types::{OrderPriority, Zone};
