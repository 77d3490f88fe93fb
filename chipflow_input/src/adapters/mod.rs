// Copyright 2025 the Chipflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Chipflow crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "flow_adapter")]
pub mod flow;
