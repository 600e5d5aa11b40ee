//! Page banner output boundary.
//!
//! The page holds a single banner slot; each update replaces the previous
//! banner (last-write-wins).

use serde::{Deserialize, Serialize};

/// Severity of a page banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerMode {
    #[default]
    Error,
    Warning,
    Info,
}

/// A single page-level notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub message: String,
    pub additional_info: String,
    pub mode: BannerMode,
}

/// Receiver for banner updates.
pub trait BannerSink: Send + Sync {
    fn update(&self, banner: Banner);
}

/// Sink that forwards banners to the tracing log. Used by the CLI, where
/// there is no page to render a banner on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBanner;

impl BannerSink for LogBanner {
    fn update(&self, banner: Banner) {
        match banner.mode {
            BannerMode::Error => {
                tracing::error!(detail = %banner.additional_info, "{}", banner.message);
            }
            BannerMode::Warning => {
                tracing::warn!(detail = %banner.additional_info, "{}", banner.message);
            }
            BannerMode::Info => {
                tracing::info!(detail = %banner.additional_info, "{}", banner.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_serializes_wire_shape() {
        let banner = Banner {
            message: "Error: failed loading 3 runs. Click Details for more information.".to_string(),
            additional_info: "test error".to_string(),
            mode: BannerMode::Error,
        };
        let json = serde_json::to_value(&banner).unwrap();
        assert_eq!(json["mode"], "error");
        assert_eq!(json["additionalInfo"], "test error");
    }
}
