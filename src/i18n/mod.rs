// SPDX-License-Identifier: MPL-2.0
//! Localized user-facing strings.
//!
//! Strings live in a Fluent resource embedded at compile time
//! (`assets/i18n/fr.ftl`) and are looked up by message key with
//! [`fluent::I18n::tr`].

pub mod fluent;
