// ==========================================
// 仓储货位优化系统 - 示例数据
// ==========================================
// 10 个物品,3 个订单 (其中 1 个 Prime)
// ==========================================

use crate::domain::Order;
use crate::importer::csv_importer::ItemRecord;

/// 示例物品 (上架顺序)
pub fn sample_items() -> Vec<ItemRecord> {
    [
        ("Laptop", 85, 150),
        ("Mouse", 90, 50),
        ("Keyboard", 75, 100),
        ("USB Cable", 80, 30),
        ("Monitor", 55, 200),
        ("Headphones", 50, 80),
        ("Webcam", 40, 100),
        ("HDMI Cable", 35, 40),
        ("Printer", 25, 300),
        ("Scanner", 20, 250),
    ]
    .into_iter()
    .map(|(name, frequency, size)| ItemRecord::new(name, frequency, size))
    .collect()
}

/// 示例订单 (入队顺序)
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::regular(1).with_item("Laptop", 1).with_item("Mouse", 2),
        Order::prime(2).with_item("Keyboard", 1).with_item("Monitor", 1),
        Order::regular(3).with_item("Printer", 1).with_item("Scanner", 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let items = sample_items();
        assert_eq!(items.len(), 10);
        assert_eq!(items.iter().filter(|i| i.frequency >= 60).count(), 4);

        let orders = sample_orders();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders.iter().filter(|o| o.is_prime()).count(), 1);
    }
}
