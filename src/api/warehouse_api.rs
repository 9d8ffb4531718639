// ==========================================
// 仓储货位优化系统 - 仓储 API
// ==========================================
// 职责: 物品上架、订单入队/履约、位置与占用查询
// 约束: 单线程同步调用,所有操作执行完成后才返回
// 审计: 所有写入记录 ActionLog
// ==========================================

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::config::WarehouseConfig;
use crate::domain::types::{MAX_FREQUENCY, MAX_ITEM_SIZE, MIN_ITEM_SIZE};
use crate::domain::{
    ActionLog, ActionType, InventoryRow, Item, ItemId, ItemPlacement, Location, Order,
    ProcessOutcome, QueueStatus, Shelf, ShelfId, Zone, ZoneSummary,
};
use crate::engine::{
    resolve_location, FrequencyTracker, FulfillmentOrchestrator, ItemRegistry, NoOpEventPublisher,
    OrderDispatcher, Rebalancer, RoutePlanner, SlottingPolicy, WarehouseEvent,
    WarehouseEventPublisher, WarehouseEventType, WarehouseGrid,
};

/// 入口显示名称
pub const ENTRY_POINT_NAME: &str = "Entry Point";

// ==========================================
// WarehouseApi - 仓储 API
// ==========================================

/// 仓储API
///
/// 职责：
/// 1. 物品上架 (参数校验 + 货位分配)
/// 2. 订单入队与按优先级履约
/// 3. 位置、分区、库存、队列查询
/// 4. ActionLog记录
pub struct WarehouseApi {
    config: WarehouseConfig,
    grid: WarehouseGrid,
    registry: ItemRegistry,
    dispatcher: OrderDispatcher,
    slotting: SlottingPolicy,
    orchestrator: FulfillmentOrchestrator,
    action_logs: Vec<ActionLog>,
    publisher: Arc<dyn WarehouseEventPublisher>,
}

impl WarehouseApi {
    /// 创建新的WarehouseApi实例 (标准布局,不发布事件)
    pub fn new(config: WarehouseConfig) -> Self {
        Self::with_publisher(config, Arc::new(NoOpEventPublisher))
    }

    /// 创建带事件发布者的实例
    ///
    /// # 参数
    /// - config: 运行参数
    /// - publisher: 事件发布者
    pub fn with_publisher(
        config: WarehouseConfig,
        publisher: Arc<dyn WarehouseEventPublisher>,
    ) -> Self {
        let entry = Location::new(config.entry_x, config.entry_y, ENTRY_POINT_NAME);
        let slotting = SlottingPolicy::new(config.hot_threshold, config.entry_x, config.entry_y);
        let orchestrator = FulfillmentOrchestrator::new(
            entry,
            FrequencyTracker::new(config.frequency_increment, config.frequency_decrement),
            Rebalancer::new(slotting),
            RoutePlanner::new(config.walking_speed),
        );
        let grid = WarehouseGrid::standard();

        info!(
            shelves = grid.len(),
            hot_threshold = config.hot_threshold,
            "仓库初始化完成"
        );

        Self {
            config,
            grid,
            registry: ItemRegistry::new(),
            dispatcher: OrderDispatcher::new(),
            slotting,
            orchestrator,
            action_logs: Vec::new(),
            publisher,
        }
    }

    // ==========================================
    // 写入接口
    // ==========================================

    /// 物品上架
    ///
    /// # 参数
    /// - name: 物品名称 (唯一)
    /// - frequency: 访问频率 (0-100)
    /// - size: 物品尺寸 (1-1000)
    ///
    /// # 返回
    /// - Ok(ItemPlacement): 上架结果
    /// - Err(ApiError::ValidationError): 参数非法,未修改任何状态
    /// - Err(ApiError::NoShelfAvailable): 没有可用货架
    pub fn add_item(&mut self, name: &str, frequency: i32, size: i32) -> ApiResult<ItemPlacement> {
        if name.trim().is_empty() {
            return Err(ApiError::ValidationError("物品名称不能为空".to_string()));
        }
        if !(0..=i32::from(MAX_FREQUENCY)).contains(&frequency) {
            return Err(ApiError::ValidationError(format!(
                "访问频率必须在 0-{} 之间,实际 {}",
                MAX_FREQUENCY, frequency
            )));
        }
        if size < MIN_ITEM_SIZE as i32 || size > MAX_ITEM_SIZE as i32 {
            return Err(ApiError::ValidationError(format!(
                "物品尺寸必须在 {}-{} 之间,实际 {}",
                MIN_ITEM_SIZE, MAX_ITEM_SIZE, size
            )));
        }
        if self.registry.contains(name) {
            return Err(ApiError::ValidationError(format!("物品已存在: {}", name)));
        }

        // 范围已校验
        let frequency = frequency as u8;
        let size = size as u32;

        let shelf_id = self
            .slotting
            .find_best_shelf(&self.grid, frequency, size)
            .ok_or_else(|| {
                warn!(item = %name, size, "无可用货架");
                ApiError::NoShelfAvailable {
                    item: name.to_string(),
                    size,
                }
            })?;

        self.place_item(name, frequency, size, shelf_id)?;

        let shelf = self.grid.shelf(shelf_id)?;
        let placement = ItemPlacement {
            item_name: name.to_string(),
            frequency,
            size,
            location: shelf.location(name),
            zone: shelf.zone,
        };

        info!(
            item = %name,
            frequency,
            size,
            zone = %placement.zone,
            label = %placement.location.label,
            "物品上架"
        );
        self.record(
            ActionLog::new(ActionType::AddItem, name).with_payload(json!({
                "frequency": frequency,
                "size": size,
                "label": placement.location.label,
                "zone": placement.zone,
            })),
        );
        self.emit(
            WarehouseEvent::new(WarehouseEventType::ItemSlotted, name)
                .at(placement.location.label.clone()),
        );

        Ok(placement)
    }

    /// 订单入队 (按优先级进入对应队列,无条件接受)
    pub fn add_order(&mut self, order: Order) {
        let order_id = order.order_id;
        let priority = order.priority;
        let lines = order.items.len();

        self.dispatcher.enqueue(order);

        info!(order_id, priority = %priority, lines, "订单入队");
        self.record(
            ActionLog::new(ActionType::EnqueueOrder, order_id.to_string())
                .with_payload(json!({ "priority": priority, "lines": lines })),
        );
        self.emit(WarehouseEvent::new(
            WarehouseEventType::OrderQueued,
            order_id.to_string(),
        ));
    }

    /// 处理下一个订单
    ///
    /// # 返回
    /// - Ok(ProcessOutcome::NoOrdersPending): 两个队列都为空
    /// - Ok(ProcessOutcome::Unfulfillable): 订单内物品全部未找到,无副作用
    /// - Ok(ProcessOutcome::Fulfilled): 履约报告 (路径、频率变化、再平衡结果)
    pub fn process_next_order(&mut self) -> ApiResult<ProcessOutcome> {
        let Some(order) = self.dispatcher.next_order() else {
            debug!("无待处理订单");
            return Ok(ProcessOutcome::NoOrdersPending);
        };

        let outcome = self
            .orchestrator
            .fulfill(&order, &mut self.grid, &mut self.registry)?;

        match &outcome {
            ProcessOutcome::Fulfilled(report) => {
                self.record(
                    ActionLog::new(ActionType::FulfillOrder, order.order_id.to_string())
                        .with_payload(json!({
                            "report_id": report.report_id,
                            "picks": report.picks.len(),
                            "missing_items": report.missing_items,
                            "total_distance": report.total_distance,
                            "total_time_min": report.total_time_min,
                        })),
                );
                self.emit(WarehouseEvent::new(
                    WarehouseEventType::OrderFulfilled,
                    order.order_id.to_string(),
                ));

                for mv in &report.rebalance.moves {
                    self.record(
                        ActionLog::new(ActionType::RelocateItem, mv.item_name.as_str())
                            .with_payload(json!({
                                "from": mv.from_label,
                                "to": mv.to_label,
                                "frequency": mv.frequency,
                            })),
                    );
                    self.emit(
                        WarehouseEvent::new(WarehouseEventType::ItemRelocated, mv.item_name.as_str())
                            .at(mv.to_label.as_str()),
                    );
                }
                for failure in &report.rebalance.failures {
                    self.record(
                        ActionLog::new(ActionType::RelocateFailed, failure.item_name.as_str())
                            .with_detail(format!(
                                "{} 无可用货架,保留在 {}",
                                failure.target_zone, failure.label
                            )),
                    );
                }
            }
            ProcessOutcome::Unfulfillable { missing_items, .. } => {
                self.record(
                    ActionLog::new(ActionType::RejectOrder, order.order_id.to_string())
                        .with_payload(json!({ "missing_items": missing_items })),
                );
                self.emit(WarehouseEvent::new(
                    WarehouseEventType::OrderRejected,
                    order.order_id.to_string(),
                ));
            }
            ProcessOutcome::NoOrdersPending => {}
        }

        Ok(outcome)
    }

    /// 处理全部待处理订单
    pub fn process_all_orders(&mut self) -> ApiResult<Vec<ProcessOutcome>> {
        let mut outcomes = Vec::new();
        while self.has_pending_orders() {
            outcomes.push(self.process_next_order()?);
        }
        info!(processed = outcomes.len(), "全部订单处理完成");
        Ok(outcomes)
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 查询物品位置
    pub fn get_item_location(&self, name: &str) -> ApiResult<Location> {
        resolve_location(&self.grid, &self.registry, name)?
            .ok_or_else(|| ApiError::ItemNotFound(name.to_string()))
    }

    /// 查询物品当前所在分区
    pub fn get_item_zone(&self, name: &str) -> ApiResult<Zone> {
        let item = self
            .registry
            .find(name)
            .ok_or_else(|| ApiError::ItemNotFound(name.to_string()))?;
        Ok(self.grid.shelf(item.assigned_shelf)?.zone)
    }

    /// 查询物品记录
    pub fn get_item(&self, name: &str) -> ApiResult<&Item> {
        self.registry
            .find(name)
            .ok_or_else(|| ApiError::ItemNotFound(name.to_string()))
    }

    pub fn has_pending_orders(&self) -> bool {
        self.dispatcher.has_pending()
    }

    pub fn queue_status(&self) -> QueueStatus {
        self.dispatcher.status()
    }

    /// 分区占用统计
    pub fn zone_summary(&self) -> ZoneSummary {
        self.grid.zone_summary()
    }

    /// 库存明细 (注册顺序)
    pub fn inventory(&self) -> ApiResult<Vec<InventoryRow>> {
        self.registry
            .iter()
            .map(|item| {
                let shelf = self.grid.shelf(item.assigned_shelf)?;
                Ok(InventoryRow {
                    item_name: item.name.clone(),
                    frequency: item.frequency,
                    size: item.size,
                    label: shelf.label.clone(),
                    zone: shelf.zone,
                })
            })
            .collect()
    }

    /// 全部货架 (枚举顺序)
    pub fn shelves(&self) -> &[Shelf] {
        self.grid.shelves()
    }

    /// 货架上物品名称 (渲染用)
    pub fn occupant_name(&self, shelf: &Shelf) -> Option<&str> {
        shelf
            .occupant()
            .and_then(|o| self.registry.get(o.item).ok())
            .map(|item| item.name.as_str())
    }

    pub fn entry_point(&self) -> &Location {
        self.orchestrator.entry()
    }

    pub fn config(&self) -> &WarehouseConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.registry.len()
    }

    /// 操作日志 (按时间顺序)
    pub fn action_logs(&self) -> &[ActionLog] {
        &self.action_logs
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 占用货架后再注册物品 (占用失败时注册表不变)
    fn place_item(
        &mut self,
        name: &str,
        frequency: u8,
        size: u32,
        shelf_id: ShelfId,
    ) -> ApiResult<ItemId> {
        let item_id = self.registry.next_id();
        self.grid.occupy(shelf_id, item_id, size)?;
        Ok(self.registry.register(name, frequency, size, shelf_id))
    }

    fn record(&mut self, log: ActionLog) {
        debug!(action_type = %log.action_type, subject = %log.subject, "记录操作日志");
        self.action_logs.push(log);
    }

    fn emit(&self, event: WarehouseEvent) {
        if let Err(e) = self.publisher.publish(event) {
            warn!("事件发布失败: {}", e);
        }
    }
}

impl Default for WarehouseApi {
    fn default() -> Self {
        Self::new(WarehouseConfig::default())
    }
}
