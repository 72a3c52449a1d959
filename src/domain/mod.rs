// Domain layer: value objects and ports. Everything here is request-scoped.

pub mod model;
pub mod ports;
