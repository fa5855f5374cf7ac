use anyhow::ensure;

use super::blur::DEFAULT_BLUR_SAMPLES;

/// Evaluator configuration.
///
/// Keep this structure small. Every field must leave the rendered image
/// independent of how the work is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterConfig {
    /// Worker threads for the row pass.
    ///
    /// `None` lets rayon pick (usually one per logical CPU).
    pub threads: Option<usize>,

    /// Midpoint quadrature steps per shadow sample.
    ///
    /// More steps converge on the exact blur integral; 4 is visually enough.
    pub blur_samples: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            threads: None,
            blur_samples: DEFAULT_BLUR_SAMPLES,
        }
    }
}

impl RasterConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(n) = self.threads {
            ensure!(n >= 1, "raster 'threads' must be >= 1 when set");
        }
        ensure!(self.blur_samples >= 1, "raster 'blur_samples' must be >= 1");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = RasterConfig::default();
        assert_eq!(config.blur_samples, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_threads_rejected() {
        let config = RasterConfig { threads: Some(0), ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("threads"));
    }

    #[test]
    fn zero_blur_samples_rejected() {
        let config = RasterConfig { blur_samples: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
