use shared::{AppError, AppResult};

use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::core::Config;
use crate::storage::RedbStorage;

/// 菜单状态 - 持有配置与共享的本地存储
///
/// 存储句柄内部是 `Arc`，目录和购物车各自持有一个克隆。
#[derive(Clone, Debug)]
pub struct MenuState {
    /// 菜单配置
    pub config: Config,
    /// 本地存储 (redb)
    pub storage: RedbStorage,
}

impl MenuState {
    pub fn new(config: Config, storage: RedbStorage) -> Self {
        Self { config, storage }
    }

    /// 初始化菜单状态
    ///
    /// 创建数据目录并打开数据库
    pub fn initialize(config: &Config) -> AppResult<Self> {
        std::fs::create_dir_all(&config.data_dir).map_err(|e| {
            AppError::internal(format!(
                "Failed to create data dir {}: {}",
                config.data_dir.display(),
                e
            ))
        })?;

        let db_path = config.db_path();
        let storage = RedbStorage::open(&db_path)?;
        tracing::debug!(path = %db_path.display(), "Local storage opened");

        Ok(Self::new(config.clone(), storage))
    }

    /// 目录仓库 (每次调用都重新从存储读取)
    pub fn catalog_store(&self) -> AppResult<CatalogStore<RedbStorage>> {
        CatalogStore::open(self.storage.clone())
    }

    /// 购物车仓库 (每次调用都重新从存储读取)
    pub fn cart_store(&self) -> AppResult<CartStore<RedbStorage>> {
        CartStore::open(self.storage.clone())
    }
}
