// ==========================================
// 仓储货位优化系统 - 订单领域模型
// ==========================================
// 说明: quantity 仅作信息展示,不扣减货架库存
// ==========================================

use crate::domain::types::OrderPriority;
use serde::{Deserialize, Serialize};

// ==========================================
// OrderItem - 订单行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_name: String, // 物品名称
    pub quantity: u32,     // 数量
}

// ==========================================
// Order - 订单
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,            // 订单号
    pub priority: OrderPriority,  // 优先级
    pub items: Vec<OrderItem>,    // 订单行 (保持录入顺序)
}

impl Order {
    pub fn new(order_id: u32, priority: OrderPriority) -> Self {
        Self {
            order_id,
            priority,
            items: Vec::new(),
        }
    }

    pub fn prime(order_id: u32) -> Self {
        Self::new(order_id, OrderPriority::Prime)
    }

    pub fn regular(order_id: u32) -> Self {
        Self::new(order_id, OrderPriority::Regular)
    }

    /// 追加订单行
    pub fn add_item(&mut self, item_name: impl Into<String>, quantity: u32) {
        self.items.push(OrderItem {
            item_name: item_name.into(),
            quantity,
        });
    }

    /// 构建器风格的追加
    pub fn with_item(mut self, item_name: impl Into<String>, quantity: u32) -> Self {
        self.add_item(item_name, quantity);
        self
    }

    pub fn is_prime(&self) -> bool {
        self.priority.is_prime()
    }
}
