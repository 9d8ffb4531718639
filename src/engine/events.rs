// ==========================================
// 仓储货位优化系统 - 引擎层事件发布
// ==========================================
// 职责: 定义仓储事件发布 trait,供下游 (看板、外部系统) 订阅
// 说明: Engine 层定义 trait,调用方注入实现
// ==========================================

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::{Arc, Mutex};

// ==========================================
// 仓储事件类型
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarehouseEventType {
    /// 物品上架
    ItemSlotted,
    /// 订单入队
    OrderQueued,
    /// 订单履约完成
    OrderFulfilled,
    /// 订单无法履约
    OrderRejected,
    /// 物品迁移
    ItemRelocated,
}

impl WarehouseEventType {
    /// 转换为字符串标识
    pub fn as_str(&self) -> &str {
        match self {
            WarehouseEventType::ItemSlotted => "ItemSlotted",
            WarehouseEventType::OrderQueued => "OrderQueued",
            WarehouseEventType::OrderFulfilled => "OrderFulfilled",
            WarehouseEventType::OrderRejected => "OrderRejected",
            WarehouseEventType::ItemRelocated => "ItemRelocated",
        }
    }
}

/// 仓储事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseEvent {
    /// 事件类型
    pub event_type: WarehouseEventType,
    /// 事件对象 (物品名 / 订单号)
    pub subject: String,
    /// 关联货位编号
    pub label: Option<String>,
}

impl WarehouseEvent {
    pub fn new(event_type: WarehouseEventType, subject: impl Into<String>) -> Self {
        Self {
            event_type,
            subject: subject.into(),
            label: None,
        }
    }

    pub fn at(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// ==========================================
// 事件发布 Trait
// ==========================================

/// 仓储事件发布者
///
/// 发布失败不影响业务操作,由调用方记录警告
pub trait WarehouseEventPublisher: Send + Sync {
    fn publish(&self, event: WarehouseEvent) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// 空操作事件发布者
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

impl WarehouseEventPublisher for NoOpEventPublisher {
    fn publish(&self, event: WarehouseEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::trace!(
            "NoOpEventPublisher: 跳过事件发布 - event_type={}, subject={}",
            event.event_type.as_str(),
            event.subject
        );
        Ok(())
    }
}

/// 内存事件收集器 (测试与 CLI 汇总用)
#[derive(Debug, Clone, Default)]
pub struct RecordingEventPublisher {
    events: Arc<Mutex<Vec<WarehouseEvent>>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已收集事件的快照
    pub fn events(&self) -> Vec<WarehouseEvent> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn count_of(&self, event_type: WarehouseEventType) -> usize {
        self.events()
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }
}

impl WarehouseEventPublisher for RecordingEventPublisher {
    fn publish(&self, event: WarehouseEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut guard = self
            .events
            .lock()
            .map_err(|e| format!("锁获取失败: {}", e))?;
        guard.push(event);
        Ok(())
    }
}
