//! Runtime configuration, read from the environment (and `.env` via dotenvy).

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Script URL for plotly.js, loaded by the browser.
    pub plotly_src: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing or blank values keep the
    /// default; an unparseable port is logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(host) = get("DASHBOARD_HOST") {
            config.host = host;
        }
        if let Some(port) = get("DASHBOARD_PORT") {
            match port.parse::<u16>() {
                Ok(p) if p > 0 => config.port = p,
                _ => log::warn!(
                    "Ignoring invalid DASHBOARD_PORT '{port}', using {}",
                    DEFAULT_PORT
                ),
            }
        }
        if let Some(src) = get("DASHBOARD_PLOTLY_CDN") {
            config.plotly_src = src;
        }
        config
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn public_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
