// SPDX-License-Identifier: MPL-2.0
//! Localized UI strings backed by embedded Fluent resources.

pub mod fluent;

pub use fluent::I18n;
