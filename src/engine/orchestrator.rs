// ==========================================
// 仓储货位优化系统 - 履约编排器
// ==========================================
// 用途: 协调单个订单的履约流程
// ==========================================
// 流程:
// 1) 订单行物品名 -> 货位 (未知物品记录并跳过)
// 2) 无任何可解析物品 -> 无法履约,不产生任何副作用
// 3) 路径规划 + 分段
// 4) 频率更新 (全部物品)
// 5) 分区再平衡 (一次)
// ==========================================

use crate::domain::{FulfillmentReport, Location, Order, PickLine, ProcessOutcome};
use crate::engine::error::EngineResult;
use crate::engine::frequency::FrequencyTracker;
use crate::engine::grid::WarehouseGrid;
use crate::engine::rebalancer::Rebalancer;
use crate::engine::registry::ItemRegistry;
use crate::engine::route::{calculate_path_distance, RoutePlanner};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// 解析物品当前位置
///
/// # 返回
/// - Ok(Some(Location)): 物品所在货架 (显示名称为物品名)
/// - Ok(None): 物品未注册
pub fn resolve_location(
    grid: &WarehouseGrid,
    registry: &ItemRegistry,
    item_name: &str,
) -> EngineResult<Option<Location>> {
    match registry.find(item_name) {
        Some(item) => {
            let shelf = grid.shelf(item.assigned_shelf)?;
            Ok(Some(shelf.location(item.name.as_str())))
        }
        None => Ok(None),
    }
}

// ==========================================
// FulfillmentOrchestrator - 履约编排器
// ==========================================
#[derive(Debug, Clone)]
pub struct FulfillmentOrchestrator {
    entry: Location,
    tracker: FrequencyTracker,
    rebalancer: Rebalancer,
    router: RoutePlanner,
}

impl FulfillmentOrchestrator {
    /// 创建编排器
    ///
    /// # 参数
    /// - entry: 入口 (路径起终点)
    /// - tracker: 频率跟踪器
    /// - rebalancer: 再平衡引擎
    /// - router: 路径规划器
    pub fn new(
        entry: Location,
        tracker: FrequencyTracker,
        rebalancer: Rebalancer,
        router: RoutePlanner,
    ) -> Self {
        Self {
            entry,
            tracker,
            rebalancer,
            router,
        }
    }

    pub fn entry(&self) -> &Location {
        &self.entry
    }

    pub fn router(&self) -> &RoutePlanner {
        &self.router
    }

    /// 履约单个订单
    pub fn fulfill(
        &self,
        order: &Order,
        grid: &mut WarehouseGrid,
        registry: &mut ItemRegistry,
    ) -> EngineResult<ProcessOutcome> {
        info!(
            order_id = order.order_id,
            priority = %order.priority,
            lines = order.items.len(),
            "开始履约订单"
        );

        // ==========================================
        // 步骤1: 解析货位
        // ==========================================
        let mut picks = Vec::new();
        let mut missing_items = Vec::new();

        for line in &order.items {
            match registry.find(&line.item_name) {
                Some(item) => {
                    let shelf = grid.shelf(item.assigned_shelf)?;
                    picks.push(PickLine {
                        item_name: item.name.clone(),
                        quantity: line.quantity,
                        location: shelf.location(item.name.as_str()),
                        zone: shelf.zone,
                    });
                }
                None => {
                    warn!(order_id = order.order_id, item = %line.item_name, "物品未找到,跳过");
                    missing_items.push(line.item_name.clone());
                }
            }
        }

        if picks.is_empty() {
            warn!(order_id = order.order_id, "订单无有效物品,无法履约");
            return Ok(ProcessOutcome::Unfulfillable {
                order_id: order.order_id,
                priority: order.priority,
                missing_items,
            });
        }

        // ==========================================
        // 步骤2: 路径规划
        // ==========================================
        debug!("步骤2: 路径规划");
        let destinations: Vec<Location> = picks.iter().map(|p| p.location.clone()).collect();
        let path = self.router.plan(&self.entry, &destinations);
        let segments = self.router.build_segments(&path);
        let total_distance = calculate_path_distance(&path);
        let total_time_min: f64 = segments.iter().map(|s| s.time_min).sum();

        // ==========================================
        // 步骤3: 频率更新
        // ==========================================
        debug!("步骤3: 频率更新");
        let frequency_changes = self.tracker.update_frequencies(registry, order);

        // ==========================================
        // 步骤4: 分区再平衡
        // ==========================================
        debug!("步骤4: 分区再平衡");
        let rebalance = self.rebalancer.rebalance_zones(grid, registry)?;

        info!(
            order_id = order.order_id,
            picks = picks.len(),
            missing = missing_items.len(),
            total_distance,
            moves = rebalance.moves.len(),
            "订单履约完成"
        );

        Ok(ProcessOutcome::Fulfilled(Box::new(FulfillmentReport {
            report_id: Uuid::new_v4(),
            order_id: order.order_id,
            priority: order.priority,
            picks,
            missing_items,
            path,
            segments,
            total_distance,
            total_time_min,
            frequency_changes,
            rebalance,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderPriority, Zone};
    use crate::engine::slotting::SlottingPolicy;

    fn setup() -> (FulfillmentOrchestrator, WarehouseGrid, ItemRegistry) {
        let mut grid = WarehouseGrid::standard();
        let mut registry = ItemRegistry::new();
        let policy = SlottingPolicy::default();

        for (name, freq) in [("Laptop", 85u8), ("Printer", 25u8)] {
            let shelf = policy.find_best_shelf(&grid, freq, 100).unwrap();
            let id = registry.register(name, freq, 100, shelf);
            grid.occupy(shelf, id, 100).unwrap();
        }

        let orchestrator = FulfillmentOrchestrator::new(
            Location::new(0, 0, "Entry Point"),
            FrequencyTracker::default(),
            Rebalancer::new(policy),
            RoutePlanner::default(),
        );
        (orchestrator, grid, registry)
    }

    #[test]
    fn test_fulfill_routes_and_updates() {
        let (orchestrator, mut grid, mut registry) = setup();
        let order = Order::regular(1)
            .with_item("Printer", 1)
            .with_item("Ghost", 2)
            .with_item("Laptop", 1);

        let outcome = orchestrator.fulfill(&order, &mut grid, &mut registry).unwrap();
        let report = outcome.report().unwrap();

        assert_eq!(report.priority, OrderPriority::Regular);
        assert_eq!(report.picks.len(), 2);
        assert_eq!(report.missing_items, vec!["Ghost".to_string()]);
        // 入口 -> Laptop(B2) -> Printer(E2) -> 入口
        let names: Vec<&str> = report.path.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Entry Point", "Laptop", "Printer", "Entry Point"]);
        assert_eq!(report.segments.len(), 3);
        assert_eq!(registry.find("Laptop").unwrap().frequency, 87);
        assert_eq!(registry.find("Printer").unwrap().frequency, 27);
        assert_eq!(report.picks[1].zone, Zone::Hot);
    }

    #[test]
    fn test_unresolvable_order_has_no_side_effects() {
        let (orchestrator, mut grid, mut registry) = setup();
        let order = Order::prime(9).with_item("Ghost", 1);

        let outcome = orchestrator.fulfill(&order, &mut grid, &mut registry).unwrap();
        match outcome {
            ProcessOutcome::Unfulfillable {
                order_id,
                missing_items,
                ..
            } => {
                assert_eq!(order_id, 9);
                assert_eq!(missing_items, vec!["Ghost".to_string()]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(registry.find("Laptop").unwrap().frequency, 85);
        assert_eq!(registry.find("Printer").unwrap().frequency, 25);
    }

    #[test]
    fn test_resolve_location() {
        let (_, grid, registry) = setup();
        let loc = resolve_location(&grid, &registry, "Laptop").unwrap().unwrap();
        assert_eq!((loc.x, loc.y, loc.label.as_str()), (1, 1, "B2"));
        assert_eq!(loc.name, "Laptop");
        assert!(resolve_location(&grid, &registry, "Ghost").unwrap().is_none());
    }
}
