// Domain layer: portfolio models and ports (interfaces) to the browser, storage and network.

pub mod model;
pub mod ports;
