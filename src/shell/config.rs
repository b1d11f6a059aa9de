// Runtime configuration for the products binary.
//
// Sources, highest precedence first: command line flags, environment variables (an optional
// `.env` file is loaded into the environment before parsing), built-in defaults.

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

use crate::shared::core::retry::RetryPolicy;
use crate::shared::infrastructure::cache::CacheConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "products", about = "Warehouse product inventory API", version)]
pub struct Config {
    #[arg(
        long,
        env = "PRODUCTS_BIND",
        value_name = "ADDR",
        default_value = "0.0.0.0:8080",
        help = "Address the HTTP server listens on"
    )]
    pub bind: SocketAddr,

    #[arg(
        long,
        env = "PRODUCTS_CACHE_CAPACITY",
        value_name = "N",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Maximum entries kept per cache region"
    )]
    pub cache_capacity: u64,

    #[arg(
        long,
        env = "PRODUCTS_CACHE_TTL_SECS",
        value_name = "SECS",
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds a cached entry stays valid"
    )]
    pub cache_ttl_secs: u64,

    #[arg(
        long,
        env = "PRODUCTS_RETRY_MAX_ATTEMPTS",
        value_name = "N",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Attempts for a stock change before a conflict is reported"
    )]
    pub retry_max_attempts: u32,

    #[arg(
        long,
        env = "PRODUCTS_RETRY_DELAY_MS",
        value_name = "MS",
        default_value_t = 100,
        help = "Fixed delay between stock change attempts"
    )]
    pub retry_delay_ms: u64,
}

impl Config {
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            capacity: usize::try_from(self.cache_capacity).unwrap_or(usize::MAX),
            ttl: Duration::from_secs(self.cache_ttl_secs),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_max_attempts,
            Duration::from_millis(self.retry_delay_ms),
        )
    }
}
