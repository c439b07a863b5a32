use anyhow::Result as Fallible;

/// Live venue busyness from a forecasting service.
pub trait BusynessGateway {
    /// Registers a venue and returns its id at the service.
    fn create_forecast(&self, name: &str, address: &str) -> Fallible<String>;

    /// Current busyness in percent (0..=100).
    fn current_busyness(&self, venue_id: &str) -> Fallible<f64>;
}
