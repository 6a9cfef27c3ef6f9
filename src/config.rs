use clap::Parser;
use eyre::{
    Context as _,
    OptionExt as _,
    Result,
};
use reqwest::Url;
use serde::Deserialize;
use std::{
    path::{
        Path,
        PathBuf,
    },
    time::Duration,
};

pub const DEFAULT_TOKEN_FILE: &str = "token.txt";

#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    #[clap(
        long,
        env = "SERVICES_API_SERVER",
        help = "Base URL of the API server, e.g. https://192.168.1.201:6443"
    )]
    pub server: Option<String>,

    #[clap(
        long,
        env = "SERVICES_NAMESPACE",
        help = "Only list services of this namespace. Lists all namespaces if not set"
    )]
    pub namespace: Option<String>,

    #[clap(
        long,
        env = "SERVICES_TOKEN_FILE",
        help = "File holding the bearer token [default: token.txt]"
    )]
    pub token_file: Option<PathBuf>,

    #[clap(
        long,
        env = "SERVICES_ALLOW_INSECURE_TLS",
        help = "Skip verification of the API server certificate. Only use this for self-signed control planes",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub allow_insecure_tls: Option<bool>,

    #[clap(
        long,
        env = "SERVICES_API_TIMEOUT",
        help = "Timeout for the whole request, e.g. 30s. No timeout if not set",
        value_parser = humantime::parse_duration
    )]
    pub timeout: Option<Duration>,

    #[clap(long, env = "SERVICES_CONFIG", help = "YAML file with defaults for the options above")]
    pub config: Option<PathBuf>,

    #[clap(short, long, help = "Log debug output to stderr")]
    pub verbose: bool,
}

/// Contents of the optional `--config` file. Every key is optional, command line and
/// environment take precedence.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server: Option<String>,
    pub namespace: Option<String>,
    pub token_file: Option<PathBuf>,
    pub allow_insecure_tls: Option<bool>,
    /// humantime string, e.g. `30s` or `1m 30s`.
    pub timeout: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_context(|| format!("unable to read config file {path:?}"))?;
        serde_yaml::from_str(&content).with_context(|| format!("invalid config file {path:?}"))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: Url,
    pub token_file: PathBuf,
    /// Accept any server certificate. Off unless explicitly requested.
    pub allow_insecure_tls: bool,
    /// `None` means the request never times out.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Layers `args` over the config file they point to (if any).
    pub fn from_args(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(args, file)
    }

    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self> {
        let server = args
            .server
            .clone()
            .or(file.server)
            .ok_or_eyre("no API server configured, pass --server or set SERVICES_API_SERVER")?;
        let namespace = args.namespace.clone().or(file.namespace);
        let api_url = services_url(&server, namespace.as_deref())?;

        let token_file = args
            .token_file
            .clone()
            .or(file.token_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE));

        let timeout = match (args.timeout, file.timeout) {
            (Some(timeout), _) => Some(timeout),
            (None, Some(timeout)) => {
                Some(humantime::parse_duration(&timeout).with_context(|| format!("invalid timeout {timeout:?}"))?)
            }
            (None, None) => None,
        };

        Ok(Config {
            api_url,
            token_file,
            allow_insecure_tls: args.allow_insecure_tls.or(file.allow_insecure_tls).unwrap_or(false),
            timeout,
        })
    }
}

/// `<server>/api/v1/services`, or the namespaced variant.
pub fn services_url(server: &str, namespace: Option<&str>) -> Result<Url> {
    let mut url = Url::parse(server).with_context(|| format!("invalid API server URL {server:?}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        eyre::bail!("API server URL must be http or https, got {server:?}");
    }

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| eyre::eyre!("API server URL {server:?} cannot be a base"))?;
        segments.pop_if_empty().extend(["api", "v1"]);
        if let Some(ns) = namespace {
            segments.extend(["namespaces", ns]);
        }
        segments.push("services");
    }

    Ok(url)
}
