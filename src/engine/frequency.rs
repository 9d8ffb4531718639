// ==========================================
// 仓储货位优化系统 - 访问频率跟踪
// ==========================================
// 职责: 每完成一单后更新全部物品的访问频率
// 规则: 本单包含 -> +increment (上限 100)
//       本单未含 -> -decrement (下限 0)
// 红线: 只改频率,不动货架占用
// ==========================================

use crate::domain::{FrequencyChange, Order};
use crate::engine::registry::ItemRegistry;
use std::collections::HashSet;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy)]
pub struct FrequencyTracker {
    increment: u8,
    decrement: u8,
}

impl FrequencyTracker {
    pub fn new(increment: u8, decrement: u8) -> Self {
        Self {
            increment,
            decrement,
        }
    }

    /// 更新整个注册表的频率
    ///
    /// # 返回
    /// 实际发生变化的物品列表 (按注册顺序); 已封顶/触底的物品不列出
    #[instrument(skip(self, registry, order), fields(order_id = order.order_id))]
    pub fn update_frequencies(
        &self,
        registry: &mut ItemRegistry,
        order: &Order,
    ) -> Vec<FrequencyChange> {
        let ordered: HashSet<&str> = order.items.iter().map(|i| i.item_name.as_str()).collect();
        let mut changes = Vec::new();

        for item in registry.iter_mut() {
            let old = item.frequency;
            let was_ordered = ordered.contains(item.name.as_str());
            let new = if was_ordered {
                item.bump_frequency(self.increment)
            } else {
                item.decay_frequency(self.decrement)
            };

            if new != old {
                debug!(item = %item.name, old, new, ordered = was_ordered, "频率变化");
                changes.push(FrequencyChange {
                    item_name: item.name.clone(),
                    old_frequency: old,
                    new_frequency: new,
                    ordered: was_ordered,
                });
            }
        }

        changes
    }
}

impl Default for FrequencyTracker {
    fn default() -> Self {
        Self::new(2, 1)
    }
}
