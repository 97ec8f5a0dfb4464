// ==========================================
// 餐厅点单系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享配置和API实例
// 注意: 不保存任何请求级状态（当前用户等由 RequestContext 携带）
// ==========================================

use std::sync::Arc;

use crate::api::StatusApi;
use crate::config::{ConfigError, ConfigManager};
use crate::engine::StatusClassifier;

/// 应用状态
///
/// 包含配置与所有API实例，可在线程间共享
#[derive(Debug, Clone)]
pub struct AppState {
    /// 配置管理器
    pub config: ConfigManager,

    /// 状态API
    pub status_api: Arc<StatusApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config: 已加载的配置
    pub fn new(config: ConfigManager) -> Self {
        tracing::info!(
            config_path = ?config.path(),
            default_locale = %config.config().default_locale,
            "初始化AppState"
        );

        let classifier = StatusClassifier::new(config.config());
        let status_api = Arc::new(StatusApi::new(classifier));

        tracing::info!("AppState初始化完成");
        Self { config, status_api }
    }

    /// 按环境变量加载配置并创建AppState
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(ConfigError): 配置加载/校验失败
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ConfigManager::load_from_env()?))
    }
}
