// ==========================================
// 仓储货位优化系统 - 运行参数
// ==========================================
// 职责: 热区阈值、频率步长、行走速度、入口坐标
// 来源: 默认值 < JSON 配置文件 < 环境变量
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// 环境变量: 热区阈值
pub const ENV_HOT_THRESHOLD: &str = "WAREHOUSE_HOT_THRESHOLD";
/// 环境变量: 行走速度 (单位/分钟)
pub const ENV_WALKING_SPEED: &str = "WAREHOUSE_WALKING_SPEED";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值无效 (key={key}): {message}")]
    InvalidValue { key: String, message: String },
}

// ==========================================
// WarehouseConfig - 运行参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseConfig {
    /// 热区阈值 (频率 >= 阈值归入热区)
    pub hot_threshold: u8,

    /// 订单包含时频率增加值
    pub frequency_increment: u8,

    /// 订单未包含时频率衰减值
    pub frequency_decrement: u8,

    /// 拣货员行走速度 (单位/分钟)
    pub walking_speed: f64,

    /// 入口坐标
    pub entry_x: i32,
    pub entry_y: i32,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            hot_threshold: 60,
            frequency_increment: 2,
            frequency_decrement: 1,
            walking_speed: 2.0,
            entry_x: 0,
            entry_y: 0,
        }
    }
}

impl WarehouseConfig {
    /// 校验配置取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hot_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                key: "hot_threshold".to_string(),
                message: format!("必须在 0-100 之间,实际 {}", self.hot_threshold),
            });
        }
        if !(self.walking_speed.is_finite() && self.walking_speed > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "walking_speed".to_string(),
                message: format!("必须为正数,实际 {}", self.walking_speed),
            });
        }
        Ok(())
    }

    /// 使用环境变量覆盖
    ///
    /// 无法解析的值会被忽略并记录警告
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var(ENV_HOT_THRESHOLD) {
            match raw.trim().parse::<u8>() {
                Ok(v) => {
                    debug!(hot_threshold = v, "环境变量覆盖热区阈值");
                    self.hot_threshold = v;
                }
                Err(_) => warn!("{} 无法解析: {}", ENV_HOT_THRESHOLD, raw),
            }
        }

        if let Ok(raw) = std::env::var(ENV_WALKING_SPEED) {
            match raw.trim().parse::<f64>() {
                Ok(v) => {
                    debug!(walking_speed = v, "环境变量覆盖行走速度");
                    self.walking_speed = v;
                }
                Err(_) => warn!("{} 无法解析: {}", ENV_WALKING_SPEED, raw),
            }
        }
    }
}

// ==========================================
// ConfigManager - 配置加载
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径 (文件不存在时使用默认值)
    ///
    /// # 返回
    /// - Ok(WarehouseConfig): 合并后的配置
    /// - Err(ConfigError): 读取/解析/校验失败
    pub fn load(path: &Path) -> Result<WarehouseConfig, ConfigError> {
        let mut config = Self::load_file(path)?;
        config.apply_env_overrides();
        config.validate()?;

        info!(
            hot_threshold = config.hot_threshold,
            frequency_increment = config.frequency_increment,
            frequency_decrement = config.frequency_decrement,
            walking_speed = config.walking_speed,
            "配置加载完成"
        );
        Ok(config)
    }

    /// 只读取文件,不应用环境变量
    pub fn load_file(path: &Path) -> Result<WarehouseConfig, ConfigError> {
        if !path.exists() {
            debug!("配置文件不存在,使用默认配置: {}", path.display());
            return Ok(WarehouseConfig::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: WarehouseConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }
}

/// 获取默认配置文件路径
///
/// 位于用户配置目录下: `<config_dir>/warehouse-slotting/config.json`
pub fn get_default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("warehouse-slotting")
        .join("config.json")
}
