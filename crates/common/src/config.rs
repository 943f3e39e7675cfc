use std::str::FromStr;

use serde::Deserialize;

/// How a metric value is drawn from its configured range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// Uniform over `[min, max]`, rounded to two decimals.
    #[default]
    Continuous,
    /// Uniform integer over `[min, max)`.
    Integer,
}

impl FromStr for Sampling {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(Sampling::Continuous),
            "integer" => Ok(Sampling::Integer),
            other => Err(anyhow::anyhow!(
                "Unknown sampling mode '{}' (expected 'continuous' or 'integer')",
                other
            )),
        }
    }
}

/// Inclusive-exclusive bounds for a synthesized metric.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    /// Build a range, rejecting non-finite or empty bounds.
    pub fn new(min: f64, max: f64) -> anyhow::Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            anyhow::bail!("Metric range bounds must be finite (got {}..{})", min, max);
        }
        if min >= max {
            anyhow::bail!("Metric range min must be below max (got {}..{})", min, max);
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,

    /// HTTP listen port (default: 3000)
    pub port: u16,

    /// Maximum number of PostgreSQL connections in the pool (default: 10)
    pub db_max_connections: u32,

    /// Network label stamped on every staking record
    pub chain: String,

    /// APY generation range, in percent
    pub apy_range: MetricRange,

    /// TVL generation range, in the chain's native unit
    pub tvl_range: MetricRange,

    pub sampling: Sampling,

    /// Run one full refresh before accepting requests
    pub refresh_on_startup: bool,
}

pub const DEFAULT_CHAIN: &str = "Multiversx Devnet";

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let apy_range = MetricRange::new(env_or("APY_MIN", 3.0)?, env_or("APY_MAX", 15.0)?)
            .map_err(|e| anyhow::anyhow!("APY_MIN/APY_MAX: {}", e))?;
        let tvl_range = MetricRange::new(
            env_or("TVL_MIN", 100_000.0)?,
            env_or("TVL_MAX", 10_000_000.0)?,
        )
        .map_err(|e| anyhow::anyhow!("TVL_MIN/TVL_MAX: {}", e))?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?,
            port: env_or("PORT", 3000)?,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10)?,
            chain: std::env::var("STAKING_CHAIN").unwrap_or_else(|_| DEFAULT_CHAIN.to_string()),
            apy_range,
            tvl_range,
            sampling: env_or("METRIC_SAMPLING", Sampling::Continuous)?,
            refresh_on_startup: env_or("REFRESH_ON_STARTUP", false)?,
        })
    }
}

/// Read and parse an optional variable, falling back to `default` when unset.
fn env_or<T: FromStr>(key: &str, default: T) -> anyhow::Result<T> {
    match std::env::var(key) {
        Ok(raw) => parse_var(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> anyhow::Result<T> {
    raw.trim().parse().map_err(|_| {
        anyhow::anyhow!(
            "{} has invalid value '{}' (expected {})",
            key,
            raw,
            std::any::type_name::<T>()
        )
    })
}
