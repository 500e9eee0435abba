// Adapters layer: the HTTP server and the HTTP self-test client around the greeting service.

pub mod console;
pub mod http_client;
pub mod http_server;
