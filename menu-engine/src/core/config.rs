use std::path::PathBuf;

/// 菜单配置 - 本地存储与日志的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | MENU_DATA_DIR | ./data | 数据目录 |
/// | MENU_DB_FILE | menu.redb | 数据库文件名 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | 控制台 JSON 日志 |
/// | LOG_DIR | (无) | 滚动日志目录 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// MENU_DATA_DIR=/tmp/hotel-veg LOG_LEVEL=debug menu cart show
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 数据目录，存放 redb 数据库
    pub data_dir: PathBuf,
    /// 数据库文件名 (相对 data_dir)
    pub db_file: String,
    /// 日志级别 (RUST_LOG 优先)
    pub log_level: String,
    /// 控制台是否输出 JSON
    pub log_json: bool,
    /// 滚动日志目录，未设置则只输出到控制台
    pub log_dir: Option<PathBuf>,
    /// 运行环境: development | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_dir: lookup("MENU_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            db_file: lookup("MENU_DB_FILE").unwrap_or_else(|| "menu.redb".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: lookup("LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// 使用自定义数据目录覆盖配置
    ///
    /// 常用于测试场景和 `--data-dir` 参数
    pub fn with_overrides(data_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    /// 数据库文件完整路径
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.db_path(), PathBuf::from("./data/menu.redb"));
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(config.log_dir.is_none());
        assert!(config.is_development());
    }

    #[test]
    fn test_overrides_from_vars() {
        let config = config_from(&[
            ("MENU_DATA_DIR", "/srv/menu"),
            ("MENU_DB_FILE", "hotel.redb"),
            ("LOG_JSON", "true"),
            ("LOG_DIR", "/var/log/menu"),
            ("ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.db_path(), PathBuf::from("/srv/menu/hotel.redb"));
        assert!(config.log_json);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/menu")));
        assert!(config.is_production());
    }

    #[test]
    fn test_unparsable_bool_falls_back() {
        let config = config_from(&[("LOG_JSON", "yes"), ("LOG_DIR", "  ")]);
        assert!(!config.log_json);
        assert!(config.log_dir.is_none());
    }
}
