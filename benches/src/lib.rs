// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Criterion benchmarks for Understory crates; see `benches/`.
