// Domain layer: entity models and ports (interfaces). No transport or config code here.

pub mod model;
pub mod ports;
