//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus,
//! statsd); without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `openrouter_response_`. Counters end in
//! `_total`.
//!
//! # Common labels
//!
//! - `status` — outcome: "ok" or "error"
//! - `field` — wire key of a dropped optional field (e.g. "created")

/// Total decode attempts.
///
/// Labels: `status` ("ok" | "error").
pub const DECODES_TOTAL: &str = "openrouter_response_decodes_total";

/// Optional fields dropped because the wire value had the wrong type.
///
/// Labels: `field`.
pub const DEGRADED_FIELDS_TOTAL: &str = "openrouter_response_degraded_fields_total";

/// Tool-call argument strings that failed to parse under the lenient policy.
pub const UNPARSED_ARGUMENTS_TOTAL: &str = "openrouter_response_unparsed_arguments_total";
