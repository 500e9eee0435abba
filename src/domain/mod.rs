// Domain layer: request/response records and the ports the adapters plug into.

pub mod model;
pub mod ports;
