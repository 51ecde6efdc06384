#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            user_agent: "PingPongLeague/1.0",
            timeout_secs: 30,
        }
    }
}

impl UpstreamSettings {
    /// CLI flag wins over the UPSTREAM_URL environment variable.
    pub fn apply_override(&mut self, cli_url: Option<String>) {
        if let Some(url) = cli_url.or_else(|| std::env::var("UPSTREAM_URL").ok()) {
            self.base_url = url;
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeagueSettings {
    pub snapshot_ttl_secs: u64,
    pub cache_dir: &'static str,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            snapshot_ttl_secs: 30,
            cache_dir: ".pingpong_cache",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstream: UpstreamSettings,
    pub league: LeagueSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            upstream: UpstreamSettings::default(),
            league: LeagueSettings::default(),
        }
    }
}
