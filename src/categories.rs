// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static category registry.
//!
//! Styling is keyed by display name, so a renamed category falls back to
//! [`DEFAULT_STYLE`] for older transactions.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{Category, CategoryStyle};

pub const UNKNOWN_COLOR: &str = "#6b7280";
pub const UNKNOWN_BACKGROUND: &str = "#f3f4f6";
pub const UNKNOWN_ICON: &str = "droplets";

pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    color: UNKNOWN_COLOR,
    background: UNKNOWN_BACKGROUND,
    icon: UNKNOWN_ICON,
};

// Declaration order is the canonical picker order.
static CATEGORIES: [Category; 12] = [
    Category { name: "Food & Dining", color: "#7c3aed", background: "#f3e8ff", icon: "utensils" },
    Category { name: "Shopping", color: "#ef4444", background: "#fee2e2", icon: "shopping-bag" },
    Category { name: "Housing", color: "#0ea5e9", background: "#e0f2fe", icon: "home" },
    Category { name: "Transportation", color: "#10b981", background: "#d1fae5", icon: "car" },
    Category { name: "Utilities", color: "#f59e0b", background: "#fef3c7", icon: "zap" },
    Category { name: "Health", color: "#ec4899", background: "#fce7f3", icon: "heart-pulse" },
    Category { name: "Travel", color: "#6366f1", background: "#e0e7ff", icon: "plane-takeoff" },
    Category { name: "Entertainment", color: "#8b5cf6", background: "#ede9fe", icon: "gamepad" },
    Category { name: "Personal", color: "#0ea5e9", background: "#e0f2fe", icon: "shirt" },
    Category { name: "Work", color: "#64748b", background: "#f1f5f9", icon: "briefcase" },
    Category { name: "Education", color: "#f97316", background: "#ffedd5", icon: "graduation-cap" },
    Category { name: "Other", color: "#6b7280", background: "#f3f4f6", icon: "droplets" },
];

static INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, c)| (c.name, i))
        .collect()
});

pub fn all() -> &'static [Category] {
    &CATEGORIES
}

pub fn all_names() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|c| c.name)
}

pub fn get(name: &str) -> Option<&'static Category> {
    position(name).map(|i| &CATEGORIES[i])
}

pub fn position(name: &str) -> Option<usize> {
    INDEX.get(name).copied()
}

pub fn is_known(name: &str) -> bool {
    INDEX.contains_key(name)
}

/// Display metadata for `name`, or [`DEFAULT_STYLE`] when it is not registered.
pub fn lookup(name: &str) -> CategoryStyle {
    match get(name) {
        Some(c) => CategoryStyle {
            color: c.color,
            background: c.background,
            icon: c.icon,
        },
        None => DEFAULT_STYLE,
    }
}
