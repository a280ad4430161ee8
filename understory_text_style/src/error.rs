// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::String;
use core::fmt;

/// A raw fill or stroke input that a [`PaintConverter`](crate::PaintConverter)
/// could not turn into a paint descriptor.
#[derive(Clone, PartialEq, Eq)]
pub struct UnsupportedPaintInput {
    /// Human readable description of the rejected input.
    pub input: String,
}

impl UnsupportedPaintInput {
    /// Creates an error describing the rejected input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl fmt::Debug for UnsupportedPaintInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnsupportedPaintInput {{ input: {:?} }}", self.input)
    }
}

impl fmt::Display for UnsupportedPaintInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported paint input: {}", self.input)
    }
}

impl core::error::Error for UnsupportedPaintInput {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_names_the_input() {
        let err = UnsupportedPaintInput::new("not-a-color");
        assert_eq!(format!("{err}"), "unsupported paint input: not-a-color");
        assert_eq!(
            format!("{err:?}"),
            "UnsupportedPaintInput { input: \"not-a-color\" }"
        );
    }
}
