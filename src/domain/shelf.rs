// ==========================================
// 仓储货位优化系统 - 货架领域模型
// ==========================================
// 红线: 单货架单物品 (occupant 为 0 或 1 个)
// 红线: 货架在初始化时创建,不销毁,只有占用状态变化
// ==========================================

use crate::domain::item::ItemId;
use crate::domain::location::{coordinate_label, Location};
use crate::domain::types::Zone;
use serde::{Deserialize, Serialize};

/// 货架默认容量
pub const DEFAULT_SHELF_CAPACITY: u32 = 1000;

/// 货架索引 (货架表中的下标,即初始化枚举顺序)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShelfId(pub usize);

// ==========================================
// ShelfOccupant - 货架占用者
// ==========================================
// 通过 ItemId 反向引用物品,不持有物品本身
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfOccupant {
    pub item: ItemId, // 物品索引
    pub size: u32,    // 物品尺寸 (即当前负载)
}

// ==========================================
// Shelf - 货架
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shelf {
    pub id: ShelfId,
    pub x: i32,
    pub y: i32,
    pub label: String, // 货位编号
    pub zone: Zone,    // 分区 (固定)
    pub capacity: u32, // 最大容量

    occupant: Option<ShelfOccupant>,
}

impl Shelf {
    pub fn new(id: ShelfId, x: i32, y: i32, zone: Zone) -> Self {
        Self {
            id,
            x,
            y,
            label: coordinate_label(x, y),
            zone,
            capacity: DEFAULT_SHELF_CAPACITY,
            occupant: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// 是否可以放入指定尺寸的物品 (空货架且容量足够)
    pub fn can_store(&self, size: u32) -> bool {
        self.is_empty() && size <= self.capacity
    }

    pub fn occupant(&self) -> Option<ShelfOccupant> {
        self.occupant
    }

    /// 当前负载: 空货架为 0,否则为物品尺寸
    pub fn current_load(&self) -> u32 {
        self.occupant.map(|o| o.size).unwrap_or(0)
    }

    /// 到指定坐标(通常为入口)的欧氏距离
    pub fn distance_to_point(&self, x: i32, y: i32) -> f64 {
        let dx = f64::from(self.x - x);
        let dy = f64::from(self.y - y);
        (dx * dx + dy * dy).sqrt()
    }

    /// 占用货架
    ///
    /// 调用方负责先检查 `can_store`,此处只做状态写入
    pub(crate) fn occupy(&mut self, item: ItemId, size: u32) {
        debug_assert!(self.is_empty(), "货架 {} 已被占用", self.label);
        self.occupant = Some(ShelfOccupant { item, size });
    }

    /// 清空货架,返回原占用者
    pub(crate) fn vacate(&mut self) -> Option<ShelfOccupant> {
        self.occupant.take()
    }

    /// 货架位置 (以物品名或货位编号为显示名称)
    pub fn location(&self, name: impl Into<String>) -> Location {
        Location {
            x: self.x,
            y: self.y,
            name: name.into(),
            label: self.label.clone(),
        }
    }
}
