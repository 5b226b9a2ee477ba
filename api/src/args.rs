use clap::{ArgAction, Parser, ValueEnum};
use food_energy_core::domain::{
    common::{FoodEnergyConfig, IdentificationConfig, VisionConfig},
    identification::entities::IdentificationStrategy,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "food-energy-api", version, about = "Food Energy API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub identification: IdentificationArgs,

    #[command(flatten)]
    pub vision: VisionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api"
    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma-separated list of origins; "*" allows any origin
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "server-metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Random,
    Label,
    Hash,
}

impl From<StrategyArg> for IdentificationStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Random => IdentificationStrategy::Random,
            StrategyArg::Label => IdentificationStrategy::Label,
            StrategyArg::Hash => IdentificationStrategy::Hash,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct IdentificationArgs {
    #[arg(
        long = "identification-strategy",
        env = "IDENTIFICATION_STRATEGY",
        value_enum,
        default_value_t = StrategyArg::Hash
    )]
    pub strategy: StrategyArg,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VisionArgs {
    #[arg(long = "vision-api-key", env = "VISION_API_KEY")]
    pub api_key: Option<String>,

    #[arg(
        long = "vision-endpoint",
        env = "VISION_ENDPOINT",
        default_value = food_energy_core::domain::common::DEFAULT_VISION_ENDPOINT
    )]
    pub endpoint: String,

    #[arg(long = "vision-timeout-secs", env = "VISION_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    #[arg(long = "vision-max-labels", env = "VISION_MAX_LABELS", default_value_t = 10)]
    pub max_labels: u32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for FoodEnergyConfig {
    fn from(args: Args) -> Self {
        Self {
            identification: IdentificationConfig {
                strategy: args.identification.strategy.into(),
            },
            vision: VisionConfig {
                api_key: args.vision.api_key,
                endpoint: args.vision.endpoint,
                timeout_secs: args.vision.timeout_secs,
                max_labels: args.vision.max_labels,
            },
        }
    }
}
