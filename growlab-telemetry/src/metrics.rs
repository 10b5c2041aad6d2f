//! ## growlab-telemetry::metrics
//! **Prometheus counters and histograms for simulation runs**

use prometheus::{exponential_buckets, Counter, Encoder, Histogram, HistogramOpts, Registry};

/// Counters and a copy-size histogram registered in a private [`Registry`].
///
/// Clones share the same underlying collectors, so an observer can hold one
/// clone while the caller gathers from another.
#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub appends: Counter,
    pub resizes: Counter,
    pub resize_copies: Histogram,
}

impl MetricsRecorder {
    /// Builds and registers every collector.
    ///
    /// This is the only constructor. Registration can fail, so there is no
    /// `Default` impl.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let appends = Counter::new("growlab_appends_total", "Total simulated appends")?;
        let resizes = Counter::new("growlab_resizes_total", "Total backing store resizes")?;

        let resize_copies = Histogram::with_opts(
            HistogramOpts::new(
                "growlab_resize_copy_elements",
                "Elements copied by a single resize",
            )
            .buckets(exponential_buckets(1.0, 4.0, 12)?),
        )?;

        registry.register(Box::new(appends.clone()))?;
        registry.register(Box::new(resizes.clone()))?;
        registry.register(Box::new(resize_copies.clone()))?;

        Ok(Self {
            registry,
            appends,
            resizes,
            resize_copies,
        })
    }

    /// Counts one resize and observes how many elements it copied.
    pub fn record_resize(&self, copied: usize) {
        self.resizes.inc();
        self.resize_copies.observe(copied as f64);
    }

    /// Adds `count` appends to the running total.
    pub fn record_appends(&self, count: usize) {
        self.appends.inc_by(count as f64);
    }

    /// Renders the registry in the Prometheus text exposition format.
    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
