// ==========================================
// 仓储货位优化系统 - 订单调度器
// ==========================================
// 职责: 维护两条准入队列并给出下一个待履约订单
// 规则:
// 1) Prime 队列: 按订单号升序 (订单号相同按入队先后)
// 2) Regular 队列: 先进先出
// 3) 始终先清空 Prime 队列
// ==========================================

use crate::domain::{Order, QueueStatus};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use tracing::debug;

/// Prime 队列元素: (订单号, 入队序号) 作为排序键
#[derive(Debug)]
struct PrimeEntry {
    order_id: u32,
    seq: u64,
    order: Order,
}

impl PartialEq for PrimeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PrimeEntry {}

impl PartialOrd for PrimeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PrimeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.order_id, self.seq).cmp(&(other.order_id, other.seq))
    }
}

// ==========================================
// OrderDispatcher - 订单调度器
// ==========================================
#[derive(Debug, Default)]
pub struct OrderDispatcher {
    prime: BinaryHeap<Reverse<PrimeEntry>>,
    regular: VecDeque<Order>,
    next_seq: u64,
}

impl OrderDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按优先级入队 (无条件接受)
    pub fn enqueue(&mut self, order: Order) {
        if order.is_prime() {
            let seq = self.next_seq;
            self.next_seq += 1;
            debug!(order_id = order.order_id, "Prime 订单入队");
            self.prime.push(Reverse(PrimeEntry {
                order_id: order.order_id,
                seq,
                order,
            }));
        } else {
            debug!(order_id = order.order_id, "Regular 订单入队");
            self.regular.push_back(order);
        }
    }

    /// 取出下一个订单
    ///
    /// # 返回
    /// - Some(Order): Prime 队列最小订单号,否则 Regular 队首
    /// - None: 两个队列都为空
    pub fn next_order(&mut self) -> Option<Order> {
        if let Some(Reverse(entry)) = self.prime.pop() {
            return Some(entry.order);
        }
        self.regular.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.prime.is_empty() || !self.regular.is_empty()
    }

    pub fn prime_len(&self) -> usize {
        self.prime.len()
    }

    pub fn regular_len(&self) -> usize {
        self.regular.len()
    }

    pub fn status(&self) -> QueueStatus {
        QueueStatus {
            prime: self.prime_len(),
            regular: self.regular_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_before_regular_regardless_of_id() {
        let mut dispatcher = OrderDispatcher::new();
        dispatcher.enqueue(Order::regular(1));
        dispatcher.enqueue(Order::prime(5));

        assert_eq!(dispatcher.next_order().unwrap().order_id, 5);
        assert_eq!(dispatcher.next_order().unwrap().order_id, 1);
        assert!(dispatcher.next_order().is_none());
    }

    #[test]
    fn test_prime_orders_by_ascending_id() {
        let mut dispatcher = OrderDispatcher::new();
        dispatcher.enqueue(Order::prime(7));
        dispatcher.enqueue(Order::prime(3));
        dispatcher.enqueue(Order::prime(5));

        let ids: Vec<u32> = std::iter::from_fn(|| dispatcher.next_order())
            .map(|o| o.order_id)
            .collect();
        assert_eq!(ids, vec![3, 5, 7]);
    }

    #[test]
    fn test_regular_is_fifo() {
        let mut dispatcher = OrderDispatcher::new();
        dispatcher.enqueue(Order::regular(9));
        dispatcher.enqueue(Order::regular(2));

        assert_eq!(dispatcher.status(), QueueStatus { prime: 0, regular: 2 });
        assert_eq!(dispatcher.next_order().unwrap().order_id, 9);
        assert_eq!(dispatcher.next_order().unwrap().order_id, 2);
        assert!(!dispatcher.has_pending());
    }

    #[test]
    fn test_duplicate_prime_ids_keep_enqueue_order() {
        let mut dispatcher = OrderDispatcher::new();
        dispatcher.enqueue(Order::prime(4).with_item("first", 1));
        dispatcher.enqueue(Order::prime(4).with_item("second", 1));

        assert_eq!(dispatcher.next_order().unwrap().items[0].item_name, "first");
        assert_eq!(dispatcher.next_order().unwrap().items[0].item_name, "second");
    }
}
