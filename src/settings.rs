//! Process configuration: built-in defaults, an optional `smokestack.toml`,
//! then `SMOKESTACK_*` environment overrides, in that order.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    /// Path to the emissions dataset CSV.
    pub dataset: String,
    /// Listen address for the HTTP server.
    pub listen: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("dataset", "data/df_co2_countrys.csv")?
            .set_default("listen", "0.0.0.0:8000")?
            .add_source(File::with_name("smokestack").required(false))
            .add_source(Environment::with_prefix("SMOKESTACK"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
