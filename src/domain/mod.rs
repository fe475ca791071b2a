// Domain layer: operation models and the config port.

pub mod model;
pub mod ports;
