// Domain layer: listing model, embedded fixtures, ports and the pure transform steps.

pub mod dataset;
pub mod model;
pub mod ports;
pub mod services;
