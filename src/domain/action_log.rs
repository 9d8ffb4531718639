// ==========================================
// 仓储货位优化系统 - 操作日志领域模型
// ==========================================
// 红线: 所有写入必须记录
// 用途: 审计追踪 (进程内保存,不持久化)
// ==========================================

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

// ==========================================
// ActionLog - 操作日志
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLog {
    pub action_id: String,             // 日志ID
    pub action_type: ActionType,       // 操作类型
    pub action_ts: NaiveDateTime,      // 操作时间戳
    pub subject: String,               // 操作对象 (物品名 / 订单号)
    pub payload_json: Option<JsonValue>, // 操作参数 (JSON)
    pub detail: Option<String>,        // 详细描述
}

impl ActionLog {
    pub fn new(action_type: ActionType, subject: impl Into<String>) -> Self {
        Self {
            action_id: Uuid::new_v4().to_string(),
            action_type,
            action_ts: Utc::now().naive_utc(),
            subject: subject.into(),
            payload_json: None,
            detail: None,
        }
    }

    pub fn with_payload(mut self, payload: JsonValue) -> Self {
        self.payload_json = Some(payload);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

// ==========================================
// ActionType - 操作类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    AddItem,        // 物品上架
    EnqueueOrder,   // 订单入队
    FulfillOrder,   // 订单履约
    RejectOrder,    // 订单无法履约
    RelocateItem,   // 再平衡迁移
    RelocateFailed, // 再平衡迁移失败
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionType::AddItem => "ADD_ITEM",
            ActionType::EnqueueOrder => "ENQUEUE_ORDER",
            ActionType::FulfillOrder => "FULFILL_ORDER",
            ActionType::RejectOrder => "REJECT_ORDER",
            ActionType::RelocateItem => "RELOCATE_ITEM",
            ActionType::RelocateFailed => "RELOCATE_FAILED",
        };
        write!(f, "{}", s)
    }
}
