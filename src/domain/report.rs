// ==========================================
// 仓储货位优化系统 - 结果报告领域模型
// ==========================================
// 用途: 上架、履约、再平衡、查询结果的输出格式
// 说明: 纯数据结构,供 API 返回与渲染层消费
// ==========================================

use crate::domain::location::Location;
use crate::domain::types::{OrderPriority, Zone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// ItemPlacement - 上架结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub item_name: String,
    pub frequency: u8,
    pub size: u32,
    pub location: Location,
    pub zone: Zone,
}

// ==========================================
// PickLine - 拣货行 (已解析到货位的订单行)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickLine {
    pub item_name: String,
    pub quantity: u32,
    pub location: Location,
    pub zone: Zone,
}

// ==========================================
// PathSegment - 路径分段
// ==========================================
// distance 为欧氏距离; waypoints 为正交行走的展示用途经点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSegment {
    pub from: Location,
    pub to: Location,
    pub distance: f64,        // 分段距离 (单位)
    pub time_min: f64,        // 分段耗时 (分钟)
    pub waypoints: Vec<Location>,
}

// ==========================================
// FrequencyChange - 频率变化
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyChange {
    pub item_name: String,
    pub old_frequency: u8,
    pub new_frequency: u8,
    pub ordered: bool, // true: 本单包含 (+), false: 未包含 (-)
}

// ==========================================
// 再平衡结果
// ==========================================

/// 成功迁移
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocationMove {
    pub item_name: String,
    pub frequency: u8,
    pub from_label: String,
    pub from_zone: Zone,
    pub to_label: String,
    pub to_zone: Zone,
}

/// 迁移失败 (无可用货架,物品留在原货架)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocationFailure {
    pub item_name: String,
    pub frequency: u8,
    pub label: String,
    pub current_zone: Zone,
    pub target_zone: Zone,
}

/// 一次再平衡扫描的结果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RebalanceReport {
    /// 分区不匹配的物品 (按扫描顺序)
    pub mismatched: Vec<String>,
    pub moves: Vec<RelocationMove>,
    pub failures: Vec<RelocationFailure>,
}

impl RebalanceReport {
    /// 所有物品均在正确分区
    pub fn is_balanced(&self) -> bool {
        self.mismatched.is_empty()
    }
}

// ==========================================
// FulfillmentReport - 履约报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentReport {
    pub report_id: Uuid,
    pub order_id: u32,
    pub priority: OrderPriority,
    pub picks: Vec<PickLine>,
    pub missing_items: Vec<String>,
    pub path: Vec<Location>,
    pub segments: Vec<PathSegment>,
    pub total_distance: f64,
    pub total_time_min: f64,
    pub frequency_changes: Vec<FrequencyChange>,
    pub rebalance: RebalanceReport,
}

// ==========================================
// ProcessOutcome - 处理下一订单的结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessOutcome {
    /// 两个队列均为空 (正常空状态,不是错误)
    NoOrdersPending,
    /// 订单内物品全部无法解析,无任何副作用
    Unfulfillable {
        order_id: u32,
        priority: OrderPriority,
        missing_items: Vec<String>,
    },
    /// 履约完成
    Fulfilled(Box<FulfillmentReport>),
}

impl ProcessOutcome {
    pub fn order_id(&self) -> Option<u32> {
        match self {
            ProcessOutcome::NoOrdersPending => None,
            ProcessOutcome::Unfulfillable { order_id, .. } => Some(*order_id),
            ProcessOutcome::Fulfilled(report) => Some(report.order_id),
        }
    }

    pub fn report(&self) -> Option<&FulfillmentReport> {
        match self {
            ProcessOutcome::Fulfilled(report) => Some(report),
            _ => None,
        }
    }
}

// ==========================================
// 查询结果
// ==========================================

/// 单个分区的占用统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOccupancy {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
}

/// 分区占用汇总
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub hot: ZoneOccupancy,
    pub cold: ZoneOccupancy,
}

/// 库存明细行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRow {
    pub item_name: String,
    pub frequency: u8,
    pub size: u32,
    pub label: String,
    pub zone: Zone,
}

/// 队列状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStatus {
    pub prime: usize,
    pub regular: usize,
}
