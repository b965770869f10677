//! Runtime settings
//!
//! Everything configurable comes from the environment and is resolved once,
//! when the repository is opened:
//!
//! - `SPRIG_DATE`: fixed commit timestamp (`%Y-%m-%d %H:%M:%S`)
//! - `NO_PAGER`: write `log` output straight to stdout
//! - `SPRIG_LOG`: log filter, read by [`crate::logging`]

use anyhow::Context;

/// Format of commit timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default)]
pub struct Settings {
    fixed_timestamp: Option<String>,
    no_pager: bool,
}

impl Settings {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let fixed_timestamp = match std::env::var("SPRIG_DATE") {
            Ok(date) => {
                let parsed = chrono::NaiveDateTime::parse_from_str(date.trim(), TIMESTAMP_FORMAT)
                    .with_context(|| format!("SPRIG_DATE is not a valid timestamp: {date}"))?;
                Some(parsed.format(TIMESTAMP_FORMAT).to_string())
            }
            Err(_) => None,
        };
        let no_pager = std::env::var_os("NO_PAGER").is_some();

        Ok(Settings {
            fixed_timestamp,
            no_pager,
        })
    }

    pub fn no_pager(&self) -> bool {
        self.no_pager
    }

    /// Timestamp for a commit created now
    pub fn timestamp(&self) -> String {
        match &self.fixed_timestamp {
            Some(timestamp) => timestamp.clone(),
            None => chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
