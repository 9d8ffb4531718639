// ==========================================
// 引擎层集成测试
// ==========================================
// 测试目标: 标准布局、货位分配与再平衡在同一网格上的协作
// ==========================================

use warehouse_slotting::domain::{Location, Order, Zone};
use warehouse_slotting::engine::{
    FrequencyTracker, FulfillmentOrchestrator, ItemRegistry, Rebalancer, RoutePlanner,
    SlottingPolicy, WarehouseGrid,
};

#[test]
fn test_standard_layout() {
    let grid = WarehouseGrid::standard();
    assert_eq!(grid.len(), 130);

    let summary = grid.zone_summary();
    assert_eq!(summary.hot.total, 9);
    assert_eq!(summary.cold.total, 121);
    assert_eq!(summary.hot.occupied + summary.cold.occupied, 0);

    assert_eq!(grid.shelf_at(1, 1).map(|s| s.zone), Some(Zone::Hot));
    assert_eq!(grid.shelf_at(3, 3).map(|s| s.zone), Some(Zone::Hot));
    assert_eq!(grid.shelf_at(13, 10).map(|s| s.label.as_str()), Some("N11"));
    assert_eq!(grid.shelf_at(1, 4).map(|s| s.zone), Some(Zone::Cold));
    // 入口所在行列没有货架
    assert!(grid.shelf_at(0, 0).is_none());
    assert!(grid.shelf_at(5, 0).is_none());
    assert!(grid.shelf_at(0, 5).is_none());
}

#[test]
fn test_orchestrator_with_custom_entry() {
    let policy = SlottingPolicy::new(60, 13, 10);
    let mut grid = WarehouseGrid::standard();
    let mut registry = ItemRegistry::new();

    // 入口在右上角: 热门物品仍只能进热区,冷门物品靠近入口
    let hot = policy.find_best_shelf(&grid, 80, 10).unwrap();
    let hot_id = registry.register("Hot", 80, 10, hot);
    grid.occupy(hot, hot_id, 10).unwrap();
    let cold = policy.find_best_shelf(&grid, 10, 10).unwrap();
    let cold_id = registry.register("Cold", 10, 10, cold);
    grid.occupy(cold, cold_id, 10).unwrap();

    assert_eq!(grid.shelf(hot).unwrap().label, "D4");
    assert_eq!(grid.shelf(cold).unwrap().label, "N11");

    let orchestrator = FulfillmentOrchestrator::new(
        Location::new(13, 10, "Entry Point"),
        FrequencyTracker::default(),
        Rebalancer::new(policy),
        RoutePlanner::default(),
    );
    let order = Order::regular(1).with_item("Hot", 1).with_item("Cold", 1);
    let outcome = orchestrator.fulfill(&order, &mut grid, &mut registry).unwrap();
    let report = outcome.report().unwrap();

    let labels: Vec<&str> = report.path.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["N11", "N11", "D4", "N11"]);
    assert!(report.rebalance.is_balanced());
}
