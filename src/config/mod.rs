// ==========================================
// 仓储货位优化系统 - 配置层
// ==========================================
// 职责: 运行参数加载与校验
// 存储: JSON 文件 + 环境变量覆盖
// ==========================================

pub mod warehouse_config;

// 重导出核心配置类型
pub use warehouse_config::{get_default_config_path, ConfigError, ConfigManager, WarehouseConfig};
