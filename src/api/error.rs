// ==========================================
// 仓储货位优化系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换引擎错误为用户友好的错误消息
// 说明: "无待处理订单"是正常空状态,不在此列
// ==========================================

use crate::engine::EngineError;
use thiserror::Error;

/// API层错误类型
/// 所有错误均为局部可恢复错误,调用方决定是否重试
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    /// 频率或尺寸超出范围、名称为空或重复 (不修改任何状态)
    #[error("数据验证失败: {0}")]
    ValidationError(String),

    /// 任何分区都没有可容纳该物品的空货架
    #[error("无可用货架: item={item}, size={size}")]
    NoShelfAvailable { item: String, size: u32 },

    /// 查询的物品未注册
    #[error("物品未找到: {0}")]
    ItemNotFound(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// 目的: 引擎层错误只可能来自货架/物品索引关系被破坏
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::InternalError(format!("货架/物品关系异常: {}", err))
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShelfId;

    #[test]
    fn test_engine_error_maps_to_internal() {
        let err: ApiError = EngineError::ShelfNotFound(ShelfId(7)).into();
        assert!(matches!(err, ApiError::InternalError(_)));
        assert!(err.to_string().contains("货架不存在"));
    }

    #[test]
    fn test_messages() {
        let err = ApiError::NoShelfAvailable {
            item: "Laptop".to_string(),
            size: 150,
        };
        assert_eq!(err.to_string(), "无可用货架: item=Laptop, size=150");
        assert_eq!(
            ApiError::ItemNotFound("Ghost".to_string()).to_string(),
            "物品未找到: Ghost"
        );
    }
}
