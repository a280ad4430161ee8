// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reporting of deprecated option shapes.

/// Receives notices about deprecated configuration that was migrated.
///
/// Notices are informational; migration always succeeds or fails on its
/// own terms regardless of the sink.
pub trait DeprecationSink {
    /// Reports that something deprecated `since` the given version was used.
    fn deprecated(&self, since: &str, message: &str);
}

impl<F: Fn(&str, &str)> DeprecationSink for F {
    fn deprecated(&self, since: &str, message: &str) {
        self(since, message);
    }
}

/// Forwards notices to the `log` facade at `warn` level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogDeprecations;

impl DeprecationSink for LogDeprecations {
    fn deprecated(&self, since: &str, message: &str) {
        log::warn!(target: "understory_text_style", "deprecated since v{since}: {message}");
    }
}

/// Drops every notice.
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentDeprecations;

impl DeprecationSink for SilentDeprecations {
    fn deprecated(&self, _since: &str, _message: &str) {}
}
