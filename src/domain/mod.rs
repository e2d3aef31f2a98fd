// Domain layer: core models and ports (interfaces). No external dependencies
// beyond std/serde and the config value types the ports hand out.

pub mod model;
pub mod ports;
