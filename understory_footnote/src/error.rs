// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors from the configuration surface.
//!
//! Footnote actions never fail; unknown ids and in-flight transitions are
//! dropped silently. Only reading or writing settings by key can be rejected.

use alloc::string::String;

use crate::settings::SettingKey;

/// Rejected settings access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The key does not name a recognized setting.
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    /// The value's kind does not match the setting.
    #[error("setting `{key}` expects a {expected} value")]
    MismatchedValue {
        /// Setting that was being updated.
        key: SettingKey,
        /// Kind of value the setting accepts.
        expected: &'static str,
    },
}
