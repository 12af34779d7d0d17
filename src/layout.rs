//! Width-driven screen composition.
//!
//! The terminal width is bucketed into a `WindowClass` and combined with the
//! presenter's snapshots into a `RenderPlan`. Nothing here mutates state; the
//! plan is recomputed on every draw.
//!
//! # Breakpoints
//!
//! - **Compact** (< 80 cols by default): single pane
//! - **Medium** (80-119 cols): single pane
//! - **Expanded** (>= 120 cols): list and detail side by side

use crate::movies::MovieItem;
use crate::presenter::{DataState, NavigationState, Page};
use serde::{Deserialize, Serialize};

/// Width buckets for the terminal.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowClass {
    Compact,
    Medium,
    Expanded,
}

impl WindowClass {
    /// Whether list and detail share the screen.
    ///
    pub fn is_dual_pane(&self) -> bool {
        matches!(self, WindowClass::Expanded)
    }

    /// Human-readable name for logging.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            WindowClass::Compact => "compact",
            WindowClass::Medium => "medium",
            WindowClass::Expanded => "expanded",
        }
    }
}

/// Minimum column counts of the wider window classes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub medium: u16,
    pub expanded: u16,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Breakpoints {
            medium: 80,
            expanded: 120,
        }
    }
}

impl Breakpoints {
    /// Determine the window class for a terminal width.
    ///
    pub fn classify(&self, width: u16) -> WindowClass {
        match width {
            w if w >= self.expanded => WindowClass::Expanded,
            w if w >= self.medium => WindowClass::Medium,
            _ => WindowClass::Compact,
        }
    }

    /// Whether `medium` does not exceed `expanded`.
    ///
    pub fn is_ordered(&self) -> bool {
        self.medium <= self.expanded
    }
}

/// What the renderer should put on screen.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPlan<'a> {
    Loading,
    /// Always shown together with a retry action.
    Error,
    List {
        items: &'a [MovieItem],
    },
    Detail {
        item: &'a MovieItem,
    },
    ListDetail {
        items: &'a [MovieItem],
        selected: Option<&'a MovieItem>,
    },
}

impl<'a> RenderPlan<'a> {
    /// Whether the plan has to offer a retry action.
    ///
    pub fn offers_retry(&self) -> bool {
        matches!(self, RenderPlan::Error)
    }

    /// The movies listed by this plan, if it shows a list.
    ///
    pub fn items(&self) -> Option<&'a [MovieItem]> {
        match *self {
            RenderPlan::List { items } | RenderPlan::ListDetail { items, .. } => Some(items),
            _ => None,
        }
    }
}

/// Pick the screen composition for the given width class and state.
///
pub fn select<'a>(
    class: WindowClass,
    data: &'a DataState,
    navigation: &'a NavigationState,
) -> RenderPlan<'a> {
    let items = match data {
        DataState::Loading => return RenderPlan::Loading,
        DataState::Failed => return RenderPlan::Error,
        DataState::Loaded(items) => items.as_slice(),
    };

    if class.is_dual_pane() {
        return RenderPlan::ListDetail {
            items,
            selected: navigation.selected(),
        };
    }

    match (navigation.page(), navigation.selected()) {
        (Page::Detail, Some(item)) => RenderPlan::Detail { item },
        _ => RenderPlan::List { items },
    }
}
