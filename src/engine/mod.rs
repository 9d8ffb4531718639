// ==========================================
// 仓储货位优化系统 - 引擎层
// ==========================================
// 职责: 货位分配、频率跟踪、再平衡、订单调度、路径规划
// 红线: 引擎不做输出格式化,所有决策以结构化结果返回
// ==========================================

pub mod dispatcher;
pub mod error;
pub mod events;
pub mod frequency;
pub mod grid;
pub mod orchestrator;
pub mod rebalancer;
pub mod registry;
pub mod route;
pub mod slotting;

// 重导出核心引擎
pub use dispatcher::OrderDispatcher;
pub use error::{EngineError, EngineResult};
pub use events::{
    NoOpEventPublisher, RecordingEventPublisher, WarehouseEvent, WarehouseEventPublisher,
    WarehouseEventType,
};
pub use frequency::FrequencyTracker;
pub use grid::{WarehouseGrid, GRID_MAX_X, GRID_MAX_Y};
pub use orchestrator::{resolve_location, FulfillmentOrchestrator};
pub use rebalancer::Rebalancer;
pub use registry::ItemRegistry;
pub use route::{calculate_path_distance, find_optimal_path, generate_waypoints, RoutePlanner};
pub use slotting::SlottingPolicy;
