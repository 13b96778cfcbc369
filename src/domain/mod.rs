// Domain layer: professor records, derived statistics and the ports the service depends on.

pub mod model;
pub mod ports;
