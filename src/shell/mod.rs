// Composition root pieces for the accounts service.
//
// - config: settings read from the environment.
// - http: the axum router over every account use case.
// - state: shared handles injected into the handlers.
// The binary itself lives in main.rs next to these modules.

pub mod config;
pub mod http;
pub mod state;
