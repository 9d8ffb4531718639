// ==========================================
// 仓储货位优化系统 - 应用状态
// ==========================================
// 职责: 加载配置、创建 API 实例、批量导入物品与订单
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::api::WarehouseApi;
use crate::config::{get_default_config_path, ConfigError, ConfigManager, WarehouseConfig};
use crate::domain::{ItemPlacement, Order};
use crate::engine::RecordingEventPublisher;
use crate::importer::{sample_items, sample_orders, ItemRecord};

/// 被拒绝的物品
#[derive(Debug, Clone, Serialize)]
pub struct RejectedItem {
    pub item_name: String,
    pub reason: String,
}

/// 批量上架结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedSummary {
    pub placements: Vec<ItemPlacement>,
    pub rejected: Vec<RejectedItem>,
}

/// 应用状态
pub struct AppState {
    /// 配置文件路径
    pub config_path: PathBuf,

    /// 仓储API
    pub warehouse_api: WarehouseApi,

    /// 事件收集器 (与 API 内的发布者共享)
    pub events: RecordingEventPublisher,
}

impl AppState {
    /// 从配置文件创建应用状态
    ///
    /// # 参数
    /// - config_path: 配置文件路径 (None 时使用默认路径)
    pub fn new(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(get_default_config_path);
        info!("初始化AppState，配置路径: {}", config_path.display());

        let config = ConfigManager::load(&config_path)?;
        Ok(Self::with_config(config, config_path))
    }

    /// 使用已加载的配置创建应用状态
    pub fn with_config(config: WarehouseConfig, config_path: PathBuf) -> Self {
        let events = RecordingEventPublisher::new();
        let warehouse_api = WarehouseApi::with_publisher(config, Arc::new(events.clone()));
        Self {
            config_path,
            warehouse_api,
            events,
        }
    }

    /// 批量上架物品
    ///
    /// 单个物品失败不中断,记录拒绝原因后继续
    pub fn seed_items(&mut self, records: &[ItemRecord]) -> SeedSummary {
        let mut summary = SeedSummary::default();

        for record in records {
            match self
                .warehouse_api
                .add_item(&record.name, record.frequency, record.size)
            {
                Ok(placement) => summary.placements.push(placement),
                Err(e) => {
                    warn!(item = %record.name, "物品上架失败: {}", e);
                    summary.rejected.push(RejectedItem {
                        item_name: record.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            placed = summary.placements.len(),
            rejected = summary.rejected.len(),
            "批量上架完成"
        );
        summary
    }

    /// 批量订单入队
    pub fn enqueue_orders(&mut self, orders: Vec<Order>) -> usize {
        let count = orders.len();
        for order in orders {
            self.warehouse_api.add_order(order);
        }
        count
    }

    /// 加载示例数据 (10 个物品,3 个订单)
    pub fn load_sample(&mut self) -> SeedSummary {
        let summary = self.seed_items(&sample_items());
        self.enqueue_orders(sample_orders());
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::WarehouseEventType;

    #[test]
    fn test_load_sample() {
        let mut state = AppState::with_config(WarehouseConfig::default(), PathBuf::new());
        let summary = state.load_sample();

        assert_eq!(summary.placements.len(), 10);
        assert!(summary.rejected.is_empty());
        assert!(state.warehouse_api.has_pending_orders());
        assert_eq!(state.events.count_of(WarehouseEventType::ItemSlotted), 10);
        assert_eq!(state.events.count_of(WarehouseEventType::OrderQueued), 3);
    }

    #[test]
    fn test_seed_items_collects_rejections() {
        let mut state = AppState::with_config(WarehouseConfig::default(), PathBuf::new());
        let summary = state.seed_items(&[
            ItemRecord::new("Laptop", 85, 150),
            ItemRecord::new("Broken", 120, 10),
            ItemRecord::new("Laptop", 10, 10),
        ]);

        assert_eq!(summary.placements.len(), 1);
        assert_eq!(summary.rejected.len(), 2);
        assert_eq!(summary.rejected[0].item_name, "Broken");
    }
}
