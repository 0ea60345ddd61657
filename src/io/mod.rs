// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for datasheets and game reports.

pub mod datasheet;
pub mod serialization;
