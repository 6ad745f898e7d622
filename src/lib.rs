// Module layout (Clean Architecture style)
// - bootstrap: configuration and wiring
// - infrastructure: key-value stores and the repositories built on them
// - presentation: command-line front end
// - application: ports, use-cases and the query service
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
