// ==========================================
// 仓储货位优化系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 CLI 与渲染层调用
// ==========================================

pub mod error;
pub mod warehouse_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use warehouse_api::{WarehouseApi, ENTRY_POINT_NAME};
