/// Storefront configuration
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DEMO_MODE | false | Serve demo catalog data |
/// | CURRENCY_SYMBOL | ₹ | Symbol prefixed to displayed prices |
/// | LOG_LEVEL | info | Log verbosity |
/// | LOG_DIR | (unset) | Directory for daily log files |
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Serve demo catalog data instead of the live catalog
    pub demo_mode: bool,
    /// Symbol prefixed to displayed prices
    pub currency_symbol: String,
    /// Log verbosity: trace | debug | info | warn | error
    pub log_level: String,
    /// Directory for daily log files; console-only when unset
    pub log_dir: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            demo_mode: false,
            currency_symbol: "₹".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            demo_mode: std::env::var("DEMO_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.demo_mode),
            currency_symbol: std::env::var("CURRENCY_SYMBOL")
                .unwrap_or(defaults.currency_symbol),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}
