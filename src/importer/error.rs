// ==========================================
// 仓储货位优化系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 行号按文件行计 (表头为第 1 行)
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(#[from] csv::Error),

    // ===== 数据映射错误 =====
    #[error("缺少必需列: {0}")]
    MissingColumn(String),

    #[error("字段为空 (行 {row}, 字段 {field})")]
    EmptyField { row: usize, field: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("订单优先级无效 (行 {row}): {value}，期望 PRIME 或 REGULAR")]
    InvalidPriority { row: usize, value: String },

    #[error("订单优先级冲突 (行 {row}): 订单 {order_id} 已登记为 {expected}")]
    PriorityConflict {
        row: usize,
        order_id: u32,
        expected: String,
    },
}

/// 导入结果类型
pub type ImportResult<T> = Result<T, ImportError>;
