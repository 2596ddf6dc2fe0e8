// SPDX-FileCopyrightText: 2025 Google LLC
//
// SPDX-License-Identifier: Apache-2.0

#![no_std]

pub mod lfsr;
pub mod logger;
pub mod memtest;
pub mod transcript;
