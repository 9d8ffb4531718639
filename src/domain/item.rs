// ==========================================
// 仓储货位优化系统 - 物品领域模型
// ==========================================
// 红线: frequency ∈ [0,100], size ∈ [1,1000]
// 红线: 已注册物品必须有货架 (只有成功上架才会注册)
// ==========================================

use crate::domain::shelf::ShelfId;
use crate::domain::types::MAX_FREQUENCY;
use serde::{Deserialize, Serialize};

/// 物品索引 (物品表中的下标,即注册顺序)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub usize);

// ==========================================
// Item - 物品
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,          // 物品名称 (唯一键)
    pub frequency: u8,         // 访问频率 (0-100)
    pub size: u32,             // 物品尺寸 (1-1000)
    pub assigned_shelf: ShelfId, // 当前货架
}

impl Item {
    /// 频率增加 (上限 100)
    pub fn bump_frequency(&mut self, step: u8) -> u8 {
        self.frequency = self.frequency.saturating_add(step).min(MAX_FREQUENCY);
        self.frequency
    }

    /// 频率衰减 (下限 0)
    pub fn decay_frequency(&mut self, step: u8) -> u8 {
        self.frequency = self.frequency.saturating_sub(step);
        self.frequency
    }
}
