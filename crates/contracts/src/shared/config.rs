use crate::demo::metrics::MetricRange;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct LandingConfig {
    pub demo: DemoConfig,
    pub metrics: MetricsConfig,
    pub notifications: NotificationConfig,
    pub forms: FormsConfig,
    pub scroll: ScrollConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    /// Period of the mock data tick
    pub tick_interval_ms: u32,
    /// Delay between consecutive children of a revealed screen
    pub stagger_ms: u32,
    /// Vertical offset children start from, in pixels
    pub entrance_offset_px: u32,
    /// Length of the entrance transition
    pub entrance_duration_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsConfig {
    pub total_tables: u32,
    pub occupancy: MetricRange,
    pub avg_time: MetricRange,
    pub elapsed: MetricRange,
    /// Largest random step of a random-walk metric (both directions)
    pub walk_step: u32,
    /// Largest random step of an elapsed-minutes metric
    pub growth_step: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    pub lifetime_ms: u32,
    pub exit_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormsConfig {
    /// Simulated network delay of the contact form
    pub submit_delay_ms: u32,
    pub press_effect_ms: u32,
    pub redirect_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScrollConfig {
    /// Gap kept between the sticky header and a scrolled-to section
    pub header_gap_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[demo]
tick_interval_ms = 10000
stagger_ms = 100
entrance_offset_px = 20
entrance_duration_ms = 500

[metrics]
total_tables = 25
occupancy = { min = 5, max = 25 }
avg_time = { min = 5, max = 30 }
elapsed = { min = 0, max = 240 }
walk_step = 2
growth_step = 2

[notifications]
lifetime_ms = 5000
exit_ms = 300

[forms]
submit_delay_ms = 1500
press_effect_ms = 200
redirect_delay_ms = 1000

[scroll]
header_gap_px = 20.0
reveal_threshold = 0.1
reveal_root_margin = "0px 0px -50px 0px"
"#;

static DEFAULT: Lazy<LandingConfig> = Lazy::new(|| {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| panic!("embedded config is invalid: {}", e))
});

/// The embedded default configuration
pub fn default_config() -> &'static LandingConfig {
    &DEFAULT
}

/// Load configuration
///
/// Search order:
/// 1. `override_toml` (the page may embed a `landing-config` script block);
///    its keys are laid over the embedded defaults, so it may be partial
/// 2. Falls back to the embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<LandingConfig> {
    match override_toml.map(str::trim).filter(|s| !s.is_empty()) {
        Some(contents) => {
            log::info!("Loading config from page override");
            let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
            let overrides: toml::Table = toml::from_str(contents)?;
            merge_tables(&mut merged, overrides);
            let config: LandingConfig = toml::Value::Table(merged).try_into()?;
            config.validate()?;
            Ok(config)
        }
        None => {
            log::info!("Using default embedded configuration");
            Ok(default_config().clone())
        }
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(inner)), toml::Value::Table(value)) => {
                merge_tables(inner, value)
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

impl LandingConfig {
    fn validate(&self) -> anyhow::Result<()> {
        let m = &self.metrics;
        for (name, range) in [
            ("occupancy", m.occupancy),
            ("avg_time", m.avg_time),
            ("elapsed", m.elapsed),
        ] {
            if range.min > range.max {
                anyhow::bail!("metrics.{}: min {} exceeds max {}", name, range.min, range.max);
            }
        }
        for (name, range) in [("occupancy", m.occupancy), ("avg_time", m.avg_time)] {
            if m.walk_step > range.max - range.min {
                anyhow::bail!(
                    "metrics.walk_step {} exceeds the width of metrics.{} ({})",
                    m.walk_step,
                    name,
                    range.max - range.min
                );
            }
        }
        if m.growth_step > m.elapsed.max - m.elapsed.min {
            anyhow::bail!(
                "metrics.growth_step {} exceeds the width of metrics.elapsed",
                m.growth_step
            );
        }
        if m.occupancy.max > m.total_tables {
            anyhow::bail!(
                "metrics.occupancy.max {} exceeds total_tables {}",
                m.occupancy.max,
                m.total_tables
            );
        }
        if self.demo.tick_interval_ms == 0 {
            anyhow::bail!("demo.tick_interval_ms must be positive");
        }
        Ok(())
    }
}
