// ==========================================
// 仓储货位优化系统 - 货位分配策略
// ==========================================
// 职责: 根据访问频率与尺寸选择最佳空货架
// 输入: 频率 + 尺寸 + 当前货架网格
// 输出: 货架索引 (只做选择,不做占用)
// ==========================================
// 规则:
// 1) 目标分区 = 频率 >= 阈值 ? 热区 : 冷区
// 2) 目标分区内: 空货架且容量足够,取离入口最近者
// 3) 距离相同取枚举顺序靠前者 (严格小于才替换)
// 4) 目标分区无候选时,在全部分区内按同样规则回退
// ==========================================

use crate::domain::{ShelfId, Zone};
use crate::engine::grid::WarehouseGrid;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy)]
pub struct SlottingPolicy {
    hot_threshold: u8,
    entry_x: i32,
    entry_y: i32,
}

impl SlottingPolicy {
    /// 构造函数
    ///
    /// # 参数
    /// - `hot_threshold`: 热区阈值
    /// - `entry_x`, `entry_y`: 入口坐标 (距离基准点)
    pub fn new(hot_threshold: u8, entry_x: i32, entry_y: i32) -> Self {
        Self {
            hot_threshold,
            entry_x,
            entry_y,
        }
    }

    pub fn hot_threshold(&self) -> u8 {
        self.hot_threshold
    }

    /// 频率对应的目标分区
    pub fn target_zone(&self, frequency: u8) -> Zone {
        Zone::for_frequency(frequency, self.hot_threshold)
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 选择最佳货架
    ///
    /// # 返回
    /// - Some(ShelfId): 最佳货架
    /// - None: 任何分区都没有可容纳的空货架
    #[instrument(skip(self, grid))]
    pub fn find_best_shelf(&self, grid: &WarehouseGrid, frequency: u8, size: u32) -> Option<ShelfId> {
        let target = self.target_zone(frequency);

        if let Some(id) = self.nearest_free(grid, size, Some(target)) {
            return Some(id);
        }

        debug!(target_zone = %target, "目标分区无可用货架,回退到全部分区");
        self.nearest_free(grid, size, None)
    }

    /// 在指定分区 (None 表示全部) 中查找最近的可用空货架
    fn nearest_free(&self, grid: &WarehouseGrid, size: u32, zone: Option<Zone>) -> Option<ShelfId> {
        let mut best: Option<(ShelfId, f64)> = None;

        for shelf in grid.shelves() {
            if zone.map_or(false, |z| shelf.zone != z) || !shelf.can_store(size) {
                continue;
            }
            let dist = shelf.distance_to_point(self.entry_x, self.entry_y);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((shelf.id, dist)),
            }
        }

        best.map(|(id, _)| id)
    }
}

impl Default for SlottingPolicy {
    fn default() -> Self {
        Self::new(60, 0, 0)
    }
}
