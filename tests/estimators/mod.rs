// SPDX-FileCopyrightText: 2026 textropy contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Module containing tests for the entropy estimators.
mod multiscale_tests;
mod permutation_tests;
