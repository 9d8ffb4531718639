// ==========================================
// 仓储货位优化系统 - 领域类型定义
// ==========================================
// 职责: 分区类型、订单优先级等基础枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 分区类型 (Zone)
// ==========================================
// 红线: 货架分区在初始化时确定,之后不再变化
// 变化的只是"哪个物品占用了热区/冷区货架"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    Hot,  // 热区 (靠近入口的 3x3 区块)
    Cold, // 冷区 (其余货架)
}

impl Zone {
    /// 根据访问频率判定目标分区
    ///
    /// # 参数
    /// - `frequency`: 访问频率 (0-100)
    /// - `hot_threshold`: 热区阈值 (频率 >= 阈值即为热区)
    pub fn for_frequency(frequency: u8, hot_threshold: u8) -> Self {
        if frequency >= hot_threshold {
            Zone::Hot
        } else {
            Zone::Cold
        }
    }

    pub fn is_hot(&self) -> bool {
        matches!(self, Zone::Hot)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Hot => write!(f, "HOT"),
            Zone::Cold => write!(f, "COLD"),
        }
    }
}

// ==========================================
// 订单优先级 (Order Priority)
// ==========================================
// Prime 订单始终先于 Regular 订单处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPriority {
    Prime,   // 优先订单 (按订单号升序)
    Regular, // 普通订单 (先进先出)
}

impl OrderPriority {
    pub fn is_prime(&self) -> bool {
        matches!(self, OrderPriority::Prime)
    }
}

impl fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderPriority::Prime => write!(f, "PRIME"),
            OrderPriority::Regular => write!(f, "REGULAR"),
        }
    }
}

// ==========================================
// 取值范围常量
// ==========================================

/// 访问频率上限
pub const MAX_FREQUENCY: u8 = 100;

/// 物品尺寸下限
pub const MIN_ITEM_SIZE: u32 = 1;

/// 物品尺寸上限
pub const MAX_ITEM_SIZE: u32 = 1000;
