// Domain layer: core models and ports (interfaces). No dependencies on
// adapters or config.

pub mod model;
pub mod ports;
