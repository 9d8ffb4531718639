// ==========================================
// 仓储货位优化系统 - 分区再平衡引擎
// ==========================================
// 职责: 检测 "频率分类 ≠ 货架分区" 的物品并尝试迁移
// 顺序: 按注册顺序收集,按收集顺序逐个处理
// 说明: 贪心单遍,非原子;前面的迁移可能占用后面物品需要的货架
// ==========================================
// 单个物品的处理:
// 1) 清空原货架
// 2) 以当前频率/尺寸重新调用货位分配策略
// 3) 找到其他空货架 -> 提交迁移 (目标分区已满时可能仍落在原分区)
// 4) 最近可用的仍是原货架 -> 放回,记录失败,等待下一轮再试
// ==========================================

use crate::domain::{ItemId, RebalanceReport, RelocationFailure, RelocationMove};
use crate::engine::error::EngineResult;
use crate::engine::grid::WarehouseGrid;
use crate::engine::registry::ItemRegistry;
use crate::engine::slotting::SlottingPolicy;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct Rebalancer {
    policy: SlottingPolicy,
}

impl Rebalancer {
    pub fn new(policy: SlottingPolicy) -> Self {
        Self { policy }
    }

    /// 收集分区不匹配的物品 (注册顺序)
    pub fn find_mismatches(
        &self,
        grid: &WarehouseGrid,
        registry: &ItemRegistry,
    ) -> EngineResult<Vec<ItemId>> {
        let mut mismatched = Vec::new();
        for item in registry.iter() {
            let shelf = grid.shelf(item.assigned_shelf)?;
            let target = self.policy.target_zone(item.frequency);
            if shelf.zone != target {
                debug!(
                    item = %item.name,
                    frequency = item.frequency,
                    current_zone = %shelf.zone,
                    target_zone = %target,
                    "分区不匹配"
                );
                mismatched.push(item.id);
            }
        }
        Ok(mismatched)
    }

    /// 执行一次再平衡扫描
    #[instrument(skip_all, fields(items = registry.len()))]
    pub fn rebalance_zones(
        &self,
        grid: &mut WarehouseGrid,
        registry: &mut ItemRegistry,
    ) -> EngineResult<RebalanceReport> {
        let mismatched = self.find_mismatches(grid, registry)?;
        let mut report = RebalanceReport::default();

        if mismatched.is_empty() {
            debug!("所有物品均在正确分区");
            return Ok(report);
        }

        for id in mismatched {
            let (name, frequency, size, old_shelf_id) = {
                let item = registry.get(id)?;
                (item.name.clone(), item.frequency, item.size, item.assigned_shelf)
            };
            let (from_label, from_zone) = {
                let shelf = grid.shelf(old_shelf_id)?;
                (shelf.label.clone(), shelf.zone)
            };
            let target_zone = self.policy.target_zone(frequency);
            report.mismatched.push(name.clone());

            grid.vacate(old_shelf_id)?;

            // 原货架已清空,重新分配可能选回原货架: 不算迁移
            let candidate = self
                .policy
                .find_best_shelf(grid, frequency, size)
                .filter(|sid| *sid != old_shelf_id);

            match candidate {
                Some(new_shelf_id) => {
                    grid.occupy(new_shelf_id, id, size)?;
                    registry.get_mut(id)?.assigned_shelf = new_shelf_id;

                    let to = grid.shelf(new_shelf_id)?;
                    info!(
                        item = %name,
                        from = %from_label,
                        to = %to.label,
                        "迁移: {} -> {}",
                        from_zone,
                        to.zone
                    );
                    report.moves.push(RelocationMove {
                        item_name: name,
                        frequency,
                        from_label,
                        from_zone,
                        to_label: to.label.clone(),
                        to_zone: to.zone,
                    });
                }
                None => {
                    grid.occupy(old_shelf_id, id, size)?;
                    warn!(item = %name, target_zone = %target_zone, "无其他可用货架,保留原位");
                    report.failures.push(RelocationFailure {
                        item_name: name,
                        frequency,
                        label: from_label,
                        current_zone: from_zone,
                        target_zone,
                    });
                }
            }
        }

        Ok(report)
    }
}
