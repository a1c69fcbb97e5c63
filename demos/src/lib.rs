// Copyright 2026 the Sectional Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for `sectional_layout`. See the `examples/` directory.
