// ==========================================
// OrderDispatcher 集成测试
// ==========================================
// 测试目标: Prime 优先、Prime 按订单号升序、Regular 先进先出
// ==========================================

use warehouse_slotting::domain::{Order, QueueStatus};
use warehouse_slotting::engine::OrderDispatcher;

fn drain(dispatcher: &mut OrderDispatcher) -> Vec<u32> {
    std::iter::from_fn(|| dispatcher.next_order())
        .map(|o| o.order_id)
        .collect()
}

#[test]
fn test_prime_before_regular_regardless_of_arrival() {
    let mut dispatcher = OrderDispatcher::new();
    dispatcher.enqueue(Order::regular(1));
    dispatcher.enqueue(Order::prime(5));

    assert_eq!(drain(&mut dispatcher), vec![5, 1]);
}

#[test]
fn test_prime_ordered_by_id_regular_fifo() {
    let mut dispatcher = OrderDispatcher::new();
    dispatcher.enqueue(Order::prime(7));
    dispatcher.enqueue(Order::regular(9));
    dispatcher.enqueue(Order::prime(3));
    dispatcher.enqueue(Order::regular(2));
    dispatcher.enqueue(Order::prime(5));

    assert_eq!(
        dispatcher.status(),
        QueueStatus {
            prime: 3,
            regular: 2
        }
    );
    assert_eq!(drain(&mut dispatcher), vec![3, 5, 7, 9, 2]);
    assert!(!dispatcher.has_pending());
}

#[test]
fn test_duplicate_prime_ids_keep_arrival_order() {
    let mut dispatcher = OrderDispatcher::new();
    dispatcher.enqueue(Order::prime(4).with_item("First", 1));
    dispatcher.enqueue(Order::prime(4).with_item("Second", 1));

    let first = dispatcher.next_order().unwrap();
    let second = dispatcher.next_order().unwrap();
    assert_eq!(first.items[0].item_name, "First");
    assert_eq!(second.items[0].item_name, "Second");
}

#[test]
fn test_prime_arriving_later_jumps_regular_queue() {
    let mut dispatcher = OrderDispatcher::new();
    dispatcher.enqueue(Order::regular(1));
    dispatcher.enqueue(Order::regular(2));

    assert_eq!(dispatcher.next_order().map(|o| o.order_id), Some(1));
    dispatcher.enqueue(Order::prime(10));
    assert_eq!(drain(&mut dispatcher), vec![10, 2]);
}
