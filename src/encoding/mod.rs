// SPDX-FileCopyrightText: 2026 textropy contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text-to-sequence encoding schemes.
//!
//! Every scheme is a pure, deterministic transform from a string to an
//! `Array1<f64>` that the estimators in [`crate::estimators`] consume.
//! Characters are Unicode scalar values as produced by [`str::chars`].

use ndarray::Array1;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Supported text encoding schemes.
///
/// The set is closed: dispatch in [`encode`] is an exhaustive `match`, so a
/// new scheme cannot be added without a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingScheme {
    Ordinal,
    OneHot,
    Frequency,
    Binary,
}

impl EncodingScheme {
    /// All schemes, in canonical order.
    pub const ALL: [EncodingScheme; 4] = [
        EncodingScheme::Ordinal,
        EncodingScheme::OneHot,
        EncodingScheme::Frequency,
        EncodingScheme::Binary,
    ];

    /// Canonical wire name of the scheme, stable for downstream consumers.
    pub fn as_str(self) -> &'static str {
        match self {
            EncodingScheme::Ordinal => "ordinal",
            EncodingScheme::OneHot => "one_hot",
            EncodingScheme::Frequency => "frequency",
            EncodingScheme::Binary => "binary",
        }
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode `text` under the given scheme.
///
/// The result is never empty for non-empty input. Encoding an empty string
/// yields an empty sequence; [`crate::analysis::analyze`] rejects empty input
/// before this point.
pub fn encode(text: &str, scheme: EncodingScheme) -> Array1<f64> {
    match scheme {
        EncodingScheme::Ordinal => ordinal_encode(text),
        EncodingScheme::OneHot => one_hot_encode(text),
        EncodingScheme::Frequency => frequency_encode(text),
        EncodingScheme::Binary => binary_encode(text),
    }
}

/// Each character's code point, in original order.
fn ordinal_encode(text: &str) -> Array1<f64> {
    text.chars().map(|c| c as u32 as f64).collect()
}

/// Indicator rows over the sorted alphabet, flattened row-major.
///
/// For text of length `L` with `k` distinct characters the output has length
/// `L * k`, with exactly one `1.0` per length-`k` block.
fn one_hot_encode(text: &str) -> Array1<f64> {
    let alphabet: BTreeSet<char> = text.chars().collect();
    let rank: HashMap<char, usize> = alphabet.iter().enumerate().map(|(i, &c)| (c, i)).collect();
    let k = alphabet.len();

    let mut out = vec![0.0; text.chars().count() * k];
    for (row, c) in text.chars().enumerate() {
        out[row * k + rank[&c]] = 1.0;
    }
    Array1::from(out)
}

/// Relative occurrence count of each character, in original order.
///
/// Values lie in `(0, 1]`; a character appearing `c` times in text of length
/// `n` maps to `c / n` at each of its positions.
fn frequency_encode(text: &str) -> Array1<f64> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    let n = text.chars().count() as f64;
    text.chars().map(|c| counts[&c] as f64 / n).collect()
}

/// Fixed-width big-endian bit expansion of each code point.
///
/// The field width is uniform across the text: at least 8 bits, widened to
/// the minimum width that holds the largest code point present. ASCII-only
/// text therefore always yields exactly 8 bits per character; a character
/// with a code point >= 256 widens every character's field rather than being
/// truncated to its low bits.
fn binary_encode(text: &str) -> Array1<f64> {
    let width = text
        .chars()
        .map(|c| bit_width(c as u32))
        .max()
        .unwrap_or(8)
        .max(8);

    let mut out = Vec::with_capacity(text.chars().count() * width);
    for c in text.chars() {
        let code = c as u32;
        for shift in (0..width).rev() {
            out.push(((code >> shift) & 1) as f64);
        }
    }
    Array1::from(out)
}

/// Number of bits needed to represent `code` (1 for zero).
fn bit_width(code: u32) -> usize {
    (32 - code.leading_zeros()).max(1) as usize
}
