// ==========================================
// RoutePlanner 集成测试
// ==========================================
// 测试目标: 最近邻访问顺序、闭环、分段耗时、正交途经点
// ==========================================

use warehouse_slotting::domain::Location;
use warehouse_slotting::engine::{
    calculate_path_distance, find_optimal_path, generate_waypoints, RoutePlanner,
};

fn entry() -> Location {
    Location::new(0, 0, "Entry Point")
}

#[test]
fn test_path_is_closed_and_visits_each_stop_once() {
    let stops = vec![
        Location::new(10, 5, "Far"),
        Location::new(1, 1, "Near"),
        Location::new(4, 2, "Middle"),
    ];
    let path = find_optimal_path(&entry(), &stops);

    let names: Vec<&str> = path.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Entry Point", "Near", "Middle", "Far", "Entry Point"]);
    assert_eq!(path.len(), stops.len() + 2);
}

#[test]
fn test_empty_destinations() {
    let path = find_optimal_path(&entry(), &[]);
    assert_eq!(path.len(), 2);
    assert!(path[0].same_point(&path[1]));
    assert_eq!(calculate_path_distance(&path), 0.0);
}

#[test]
fn test_ties_go_to_first_listed() {
    // B5 与 E2 到入口距离相同
    let stops = vec![Location::new(4, 1, "E2"), Location::new(1, 4, "B5")];
    let path = find_optimal_path(&entry(), &stops);
    assert_eq!(path[1].name, "E2");
}

#[test]
fn test_segments_and_time() {
    let planner = RoutePlanner::new(2.0);
    let path = planner.plan(&entry(), &[Location::new(3, 4, "Box")]);
    let segments = planner.build_segments(&path);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].distance, 5.0);
    assert_eq!(segments[0].time_min, 2.5);
    assert_eq!(calculate_path_distance(&path), 10.0);

    // 先横后纵: B1 C1 D1 D2 D3 D4 D5
    let labels: Vec<&str> = segments[0].waypoints.iter().map(|w| w.label.as_str()).collect();
    assert_eq!(labels, vec!["B1", "C1", "D1", "D2", "D3", "D4", "D5"]);
}

#[test]
fn test_waypoints_negative_direction() {
    let from = Location::new(3, 2, "A");
    let to = Location::new(1, 0, "B");
    let coords: Vec<(i32, i32)> = generate_waypoints(&from, &to)
        .iter()
        .map(|w| (w.x, w.y))
        .collect();
    assert_eq!(coords, vec![(2, 2), (1, 2), (1, 1), (1, 0)]);
    assert!(generate_waypoints(&from, &from).is_empty());
}
