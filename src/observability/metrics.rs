use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub orders_created_total: IntCounter,
    pub drivers_registered_total: IntCounter,
    pub assignments_total: IntCounterVec,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let orders_created_total =
            IntCounter::new("orders_created_total", "Total orders created")
                .expect("valid orders_created_total metric");

        let drivers_registered_total =
            IntCounter::new("drivers_registered_total", "Total drivers registered")
                .expect("valid drivers_registered_total metric");

        let assignments_total = IntCounterVec::new(
            Opts::new("assignments_total", "Total driver assignments by outcome"),
            &["outcome"],
        )
        .expect("valid assignments_total metric");

        registry
            .register(Box::new(orders_created_total.clone()))
            .expect("register orders_created_total");
        registry
            .register(Box::new(drivers_registered_total.clone()))
            .expect("register drivers_registered_total");
        registry
            .register(Box::new(assignments_total.clone()))
            .expect("register assignments_total");

        Self {
            registry,
            orders_created_total,
            drivers_registered_total,
            assignments_total,
        }
    }

    pub fn record_assignment(&self, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.assignments_total.with_label_values(&[outcome]).inc();
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
