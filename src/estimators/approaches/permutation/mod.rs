// SPDX-FileCopyrightText: 2026 textropy contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Permutation (ordinal pattern) estimator module
// Contains the permutation entropy estimator and its pattern utilities.

pub mod pattern_utils;
pub mod permutation_estimator;
