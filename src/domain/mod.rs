// Domain layer: trace records and the source port.

pub mod model;
pub mod ports;
