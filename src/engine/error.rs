// ==========================================
// 仓储货位优化系统 - 引擎层错误类型
// ==========================================
// 说明: 仅用于货架/物品索引关系被破坏的情况
// 正常业务失败 (无货架、未知物品) 通过返回值表达
// ==========================================

use crate::domain::{ItemId, ShelfId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("货架不存在: shelf_id={0:?}")]
    ShelfNotFound(ShelfId),

    #[error("物品不存在: item_id={0:?}")]
    ItemNotFound(ItemId),

    #[error("货架已被占用: {label}")]
    ShelfOccupied { label: String },

    #[error("货架容量不足: {label}, capacity={capacity}, size={size}")]
    CapacityExceeded {
        label: String,
        capacity: u32,
        size: u32,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
