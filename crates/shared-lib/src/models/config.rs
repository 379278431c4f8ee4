use color_eyre::eyre::eyre;
use color_eyre::{Help, Result};
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

/// 默认监听地址
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// 默认日志级别，可被 `RUST_LOG` 覆盖
const DEFAULT_LOG_LEVEL: &str = "info";

/// 数据库配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// postgresql数据库链接字符串
    pub url: String,

    /// 连接池最少保留的链接数
    ///
    /// 可通过环境变量 `DB_MIN_CONNECTIONS` 来调整
    pub min_connections: u32,

    /// 连接池最大链接数，生产环境配置30~40即可
    ///
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,

    /// 获取链接的超时时间（秒）
    ///
    /// 可通过环境变量 `DB_ACQUIRE_TIMEOUT_SECONDS` 来调整
    pub acquire_timeout_seconds: u64,
}

/// 程序配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Web服务监听地址
    pub bind_addr: String,

    /// 数据库配置
    ///
    /// 没有设置 `DATABASE_URL` 时为 `None`，此时使用内存存储
    pub database: Option<DatabaseConfig>,

    /// 日志过滤规则，格式同 `RUST_LOG`
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 根据 `lookup` 返回的变量值构建配置
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        if bind_addr.trim().is_empty() {
            return Err(eyre!("BIND_ADDR is empty")).suggestion("设置 BIND_ADDR 环境变量，例如 0.0.0.0:8080");
        }

        let database = match lookup("DATABASE_URL") {
            Some(url) if url.trim().is_empty() => {
                return Err(eyre!("DATABASE_URL is set but empty"))
                    .suggestion("删除 DATABASE_URL 以使用内存存储，或设置有效的postgresql链接");
            }
            Some(url) => Some(DatabaseConfig {
                url,
                min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 10),
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 40),
                acquire_timeout_seconds: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECONDS", 3),
            }),
            None => None,
        };

        Ok(AppConfig {
            bind_addr,
            database,
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} = {:?} is not valid, fallback to {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_database() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.database.is_none());
    }

    #[test]
    fn test_database_pool_settings() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/students"),
            ("DB_MAX_CONNECTIONS", "8"),
            ("DB_MIN_CONNECTIONS", "not-a-number"),
        ])
        .unwrap();

        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://localhost/students");
        assert_eq!(database.max_connections, 8);
        // 解析失败回退默认值
        assert_eq!(database.min_connections, 10);
        assert_eq!(database.acquire_timeout_seconds, 3);
    }

    #[test]
    fn test_blank_database_url_is_rejected() {
        assert!(config_from(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn test_blank_bind_addr_is_rejected() {
        assert!(config_from(&[("BIND_ADDR", "")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("BIND_ADDR", "127.0.0.1:3000"), ("RUST_LOG", "debug")]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.log_level, "debug");
    }
}
