// ==========================================
// 配置加载集成测试
// ==========================================
// 测试目标: JSON 配置文件、默认值回退、环境变量覆盖、校验
// ==========================================


use std::path::Path;

use test_helpers::write_temp_file;
use warehouse_slotting::config::{ConfigError, ConfigManager, WarehouseConfig};
use warehouse_slotting::domain::{Order, Zone};
use warehouse_slotting::WarehouseApi;

#[test]
fn test_missing_file_uses_defaults() {
    let config = ConfigManager::load_file(Path::new("/nonexistent/warehouse/config.json")).unwrap();
    assert_eq!(config, WarehouseConfig::default());
}

#[test]
fn test_load_file_and_invalid_json() {
    let file = write_temp_file(r#"{"hot_threshold": 80, "walking_speed": 4.0}"#, ".json");
    let config = ConfigManager::load_file(file.path()).unwrap();
    assert_eq!(config.hot_threshold, 80);
    assert_eq!(config.walking_speed, 4.0);
    assert_eq!(config.frequency_increment, 2);

    let broken = write_temp_file("{ not json", ".json");
    assert!(matches!(
        ConfigManager::load_file(broken.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_env_overrides_and_validation() {
    // 本文件内唯一修改环境变量的测试
    let file = write_temp_file(r#"{"hot_threshold": 80}"#, ".json");

    std::env::set_var("WAREHOUSE_HOT_THRESHOLD", "70");
    std::env::set_var("WAREHOUSE_WALKING_SPEED", "3.5");
    let config = ConfigManager::load(file.path()).unwrap();
    assert_eq!(config.hot_threshold, 70);
    assert_eq!(config.walking_speed, 3.5);

    // 无法解析的值被忽略
    std::env::set_var("WAREHOUSE_HOT_THRESHOLD", "hot");
    std::env::set_var("WAREHOUSE_WALKING_SPEED", "-1");
    let err = ConfigManager::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "walking_speed"));

    std::env::remove_var("WAREHOUSE_HOT_THRESHOLD");
    std::env::remove_var("WAREHOUSE_WALKING_SPEED");
}

#[test]
fn test_config_drives_engine() {
    let config = WarehouseConfig {
        hot_threshold: 90,
        frequency_increment: 5,
        frequency_decrement: 0,
        walking_speed: 1.0,
        ..Default::default()
    };
    let mut api = WarehouseApi::new(config);

    // 85 < 90: 归入冷区
    api.add_item("Laptop", 85, 150).unwrap();
    api.add_item("Mouse", 50, 50).unwrap();
    assert_eq!(api.get_item_zone("Laptop").unwrap(), Zone::Cold);

    api.add_order(Order::regular(1).with_item("Laptop", 1));
    let outcome = api.process_next_order().unwrap();
    let report = outcome.report().unwrap();

    // +5 达到 90,迁入热区; 衰减为 0 时 Mouse 不变
    assert_eq!(api.get_item("Laptop").unwrap().frequency, 90);
    assert_eq!(api.get_item("Mouse").unwrap().frequency, 50);
    assert_eq!(report.rebalance.moves.len(), 1);
    assert_eq!(api.get_item_zone("Laptop").unwrap(), Zone::Hot);
    // 速度 1.0: 耗时等于距离
    assert!((report.total_time_min - report.total_distance).abs() < 1e-9);
}
