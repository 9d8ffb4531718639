// ==========================================
// 仓储货位优化系统 - 货架网格
// ==========================================
// 职责: 固定货架布局 + 占用状态维护
// 红线: 单货架单物品; 货架只创建一次,只变更占用
// ==========================================
// 布局 (枚举顺序即货架索引顺序):
// 1) 热区 3x3: x∈[1,3], y∈[1,3] (逐行扫描)
// 2) 冷区主块: x∈[4,13], y∈[1,10]
// 3) 冷区侧块: x∈[1,3], y∈[4,10]
// ==========================================

use crate::domain::{ItemId, Shelf, ShelfId, Zone, ZoneOccupancy, ZoneSummary};
use crate::engine::error::{EngineError, EngineResult};
use std::ops::RangeInclusive;
use tracing::debug;

/// 布局最大列坐标 (渲染用)
pub const GRID_MAX_X: i32 = 13;
/// 布局最大行坐标 (渲染用)
pub const GRID_MAX_Y: i32 = 10;

// ==========================================
// WarehouseGrid - 货架网格
// ==========================================
#[derive(Debug, Clone)]
pub struct WarehouseGrid {
    shelves: Vec<Shelf>,
}

impl WarehouseGrid {
    /// 创建标准布局 (9 个热区货架 + 121 个冷区货架)
    pub fn standard() -> Self {
        let mut grid = Self {
            shelves: Vec::with_capacity(130),
        };

        grid.push_block(1..=3, 1..=3, Zone::Hot);
        grid.push_block(4..=GRID_MAX_X, 1..=GRID_MAX_Y, Zone::Cold);
        grid.push_block(1..=3, 4..=GRID_MAX_Y, Zone::Cold);

        debug!(shelf_count = grid.shelves.len(), "货架网格初始化完成");
        grid
    }

    /// 逐行追加一个矩形区块
    fn push_block(&mut self, xs: RangeInclusive<i32>, ys: RangeInclusive<i32>, zone: Zone) {
        for y in ys {
            for x in xs.clone() {
                let id = ShelfId(self.shelves.len());
                self.shelves.push(Shelf::new(id, x, y, zone));
            }
        }
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 按枚举顺序的全部货架
    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    pub fn shelf(&self, id: ShelfId) -> EngineResult<&Shelf> {
        self.shelves.get(id.0).ok_or(EngineError::ShelfNotFound(id))
    }

    /// 按坐标查找货架
    pub fn shelf_at(&self, x: i32, y: i32) -> Option<&Shelf> {
        self.shelves.iter().find(|s| s.x == x && s.y == y)
    }

    /// 分区占用统计
    pub fn zone_summary(&self) -> ZoneSummary {
        let mut summary = ZoneSummary::default();
        for shelf in &self.shelves {
            let bucket: &mut ZoneOccupancy = match shelf.zone {
                Zone::Hot => &mut summary.hot,
                Zone::Cold => &mut summary.cold,
            };
            bucket.total += 1;
            if !shelf.is_empty() {
                bucket.occupied += 1;
            }
        }
        summary.hot.available = summary.hot.total - summary.hot.occupied;
        summary.cold.available = summary.cold.total - summary.cold.occupied;
        summary
    }

    // ==========================================
    // 占用变更
    // ==========================================

    /// 将物品放入货架
    pub fn occupy(&mut self, id: ShelfId, item: ItemId, size: u32) -> EngineResult<()> {
        let shelf = self
            .shelves
            .get_mut(id.0)
            .ok_or(EngineError::ShelfNotFound(id))?;

        if !shelf.is_empty() {
            return Err(EngineError::ShelfOccupied {
                label: shelf.label.clone(),
            });
        }
        if size > shelf.capacity {
            return Err(EngineError::CapacityExceeded {
                label: shelf.label.clone(),
                capacity: shelf.capacity,
                size,
            });
        }

        shelf.occupy(item, size);
        Ok(())
    }

    /// 清空货架
    pub fn vacate(&mut self, id: ShelfId) -> EngineResult<()> {
        let shelf = self
            .shelves
            .get_mut(id.0)
            .ok_or(EngineError::ShelfNotFound(id))?;
        shelf.vacate();
        Ok(())
    }
}

impl Default for WarehouseGrid {
    fn default() -> Self {
        Self::standard()
    }
}
