// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior settings for a set of footnotes.
//!
//! ## Overview
//!
//! [`Settings`] is a plain struct: build it with [`Default`] and the `with_*`
//! methods, or deserialize it (feature `serde`) from camel-case keys such as
//! `{"allowMultiple": true}`. Callbacks are never serialized.
//!
//! Hosts that expose settings by name (for example to a scripting layer) can
//! go through [`SettingKey`] and [`SettingValue`] with
//! [`Settings::get`] / [`Settings::update`].
//!
//! Changes take effect on the next action; nothing is re-evaluated retroactively.
//!
//! ```
//! use understory_footnote::settings::{SettingKey, SettingValue, Settings};
//!
//! let mut s: Settings<u32> = Settings::default();
//! let key: SettingKey = "allowMultiple".parse().unwrap();
//! s.update(key, SettingValue::Bool(true)).unwrap();
//! assert!(s.allow_multiple);
//! assert!(s.update(key, SettingValue::Callback(None)).is_err());
//! ```

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::SettingsError;
use crate::types::ActionCallback;

/// Settings consulted by the [coordinator](crate::coordinator::Coordinator).
///
/// `H` is the presentation handle type passed to the callbacks.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default, bound = "")
)]
pub struct Settings<H> {
    /// When `false`, activating a footnote first dismisses every other ready one.
    pub allow_multiple: bool,
    /// When `true`, a press outside every footnote dismisses them all.
    pub dismiss_on_document_touch: bool,
    /// Invoked during every accepted activation.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub activate_callback: Option<ActionCallback<H>>,
    /// Invoked during every accepted dismissal.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub dismiss_callback: Option<ActionCallback<H>>,
}

impl<H> Settings<H> {
    /// Set [`allow_multiple`](Self::allow_multiple).
    pub fn with_allow_multiple(mut self, allow: bool) -> Self {
        self.allow_multiple = allow;
        self
    }

    /// Set [`dismiss_on_document_touch`](Self::dismiss_on_document_touch).
    pub fn with_dismiss_on_document_touch(mut self, dismiss: bool) -> Self {
        self.dismiss_on_document_touch = dismiss;
        self
    }

    /// Set the activation callback.
    pub fn with_activate_callback(mut self, callback: ActionCallback<H>) -> Self {
        self.activate_callback = Some(callback);
        self
    }

    /// Set the dismissal callback.
    pub fn with_dismiss_callback(mut self, callback: ActionCallback<H>) -> Self {
        self.dismiss_callback = Some(callback);
        self
    }

    /// Read one setting by key.
    pub fn get(&self, key: SettingKey) -> SettingValue<H> {
        match key {
            SettingKey::AllowMultiple => SettingValue::Bool(self.allow_multiple),
            SettingKey::DismissOnDocumentTouch => {
                SettingValue::Bool(self.dismiss_on_document_touch)
            }
            SettingKey::ActivateCallback => SettingValue::Callback(self.activate_callback.clone()),
            SettingKey::DismissCallback => SettingValue::Callback(self.dismiss_callback.clone()),
        }
    }

    /// Write one setting by key.
    ///
    /// A value of the wrong kind is rejected and leaves the settings unchanged.
    pub fn update(&mut self, key: SettingKey, value: SettingValue<H>) -> Result<(), SettingsError> {
        match (key, value) {
            (SettingKey::AllowMultiple, SettingValue::Bool(v)) => self.allow_multiple = v,
            (SettingKey::DismissOnDocumentTouch, SettingValue::Bool(v)) => {
                self.dismiss_on_document_touch = v;
            }
            (SettingKey::ActivateCallback, SettingValue::Callback(cb)) => {
                self.activate_callback = cb;
            }
            (SettingKey::DismissCallback, SettingValue::Callback(cb)) => self.dismiss_callback = cb,
            (key, _) => {
                return Err(SettingsError::MismatchedValue {
                    key,
                    expected: key.expected_kind(),
                });
            }
        }
        Ok(())
    }
}

impl<H> Default for Settings<H> {
    fn default() -> Self {
        Self {
            allow_multiple: false,
            dismiss_on_document_touch: true,
            activate_callback: None,
            dismiss_callback: None,
        }
    }
}

impl<H> Clone for Settings<H> {
    fn clone(&self) -> Self {
        Self {
            allow_multiple: self.allow_multiple,
            dismiss_on_document_touch: self.dismiss_on_document_touch,
            activate_callback: self.activate_callback.clone(),
            dismiss_callback: self.dismiss_callback.clone(),
        }
    }
}

impl<H> fmt::Debug for Settings<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("allow_multiple", &self.allow_multiple)
            .field("dismiss_on_document_touch", &self.dismiss_on_document_touch)
            .field("activate_callback", &self.activate_callback.is_some())
            .field("dismiss_callback", &self.dismiss_callback.is_some())
            .finish()
    }
}

/// Name of a single setting.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SettingKey {
    /// [`Settings::allow_multiple`].
    AllowMultiple,
    /// [`Settings::dismiss_on_document_touch`].
    DismissOnDocumentTouch,
    /// [`Settings::activate_callback`].
    ActivateCallback,
    /// [`Settings::dismiss_callback`].
    DismissCallback,
}

impl SettingKey {
    /// Every recognized key.
    pub const ALL: [Self; 4] = [
        Self::AllowMultiple,
        Self::DismissOnDocumentTouch,
        Self::ActivateCallback,
        Self::DismissCallback,
    ];

    /// Camel-case name, as used in serialized settings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AllowMultiple => "allowMultiple",
            Self::DismissOnDocumentTouch => "dismissOnDocumentTouch",
            Self::ActivateCallback => "activateCallback",
            Self::DismissCallback => "dismissCallback",
        }
    }

    const fn expected_kind(self) -> &'static str {
        match self {
            Self::AllowMultiple | Self::DismissOnDocumentTouch => "boolean",
            Self::ActivateCallback | Self::DismissCallback => "callback",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SettingKey {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| SettingsError::UnknownKey(s.to_string()))
    }
}

/// Value of a single setting.
pub enum SettingValue<H> {
    /// Value of a boolean setting.
    Bool(bool),
    /// Value of a callback setting; `None` clears it.
    Callback(Option<ActionCallback<H>>),
}

impl<H> SettingValue<H> {
    /// The boolean, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            Self::Callback(_) => None,
        }
    }
}

impl<H> fmt::Debug for SettingValue<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Callback(cb) => f
                .debug_tuple("Callback")
                .field(&cb.as_ref().map(|_| "<fn>"))
                .finish(),
        }
    }
}
