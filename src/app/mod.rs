// ==========================================
// 仓储货位优化系统 - 应用层
// ==========================================
// 职责: 应用状态装配与文本渲染,供 CLI 使用
// ==========================================

pub mod render;
pub mod state;

// 重导出
pub use state::{AppState, RejectedItem, SeedSummary};
