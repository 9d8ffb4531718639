// ==========================================
// 仓储货位优化系统 - 核心库
// ==========================================
// 职责: 按访问频率分配货位、按优先级履约订单、规划拣货路径
// 运行模型: 单线程同步,内存状态
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配与渲染
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{OrderPriority, Zone};

// 领域实体
pub use domain::{
    ActionLog, ActionType, FulfillmentReport, Item, ItemPlacement, Location, Order, OrderItem,
    ProcessOutcome, Shelf,
};

// 引擎
pub use engine::{
    FrequencyTracker, FulfillmentOrchestrator, OrderDispatcher, Rebalancer, RoutePlanner,
    SlottingPolicy, WarehouseGrid,
};

// API
pub use api::{ApiError, ApiResult, WarehouseApi};

// 配置
pub use config::WarehouseConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓储货位优化系统";
