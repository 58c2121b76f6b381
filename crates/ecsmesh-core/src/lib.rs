//! Builds an ECS Fargate task definition for a service running in AWS App Mesh.
//!
//! The task holds three containers: the application, an Envoy proxy that intercepts its traffic,
//! and an X-Ray daemon collecting traces. Everything here is pure; reading inputs and writing the
//! result is left to the caller.

mod error;
pub use error::{BuildError, ErrorKind, RenderError};

mod params;
pub use params::{DEFAULT_CPU, DEFAULT_MEMORY, DEFAULT_REGION, ResolvedParams, TaskParams};

mod environment;
pub use environment::decode_environment;

pub mod naming;

pub mod mesh;
pub mod xray;

mod builder;
pub use builder::{build, build_task_definition};

mod render;
pub use render::{parse, render_pretty};
