//! Prev/next affordances for the month grid.
//!
//! `NavigationControl` holds no state beyond its configuration. It decides
//! which affordances exist for an orientation and what each one asks the
//! engine to do; range legality stays with the host callbacks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Orientation;

/// Side of the navigation bar an affordance sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavDirection {
    Prev,
    Next,
}

/// Request an activated affordance hands to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationIntent {
    PrevMonth,
    NextMonth,
    /// The "next" affordance in vertical-scrollable layouts.
    LoadMoreMonths,
}

/// Built-in icon used when the host supplies no replacement visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultNavIcon {
    LeftArrow,
    RightArrow,
    ChevronUp,
    ChevronDown,
}

impl DefaultNavIcon {
    #[must_use]
    pub const fn for_direction(orientation: Orientation, direction: NavDirection) -> Self {
        match (orientation.is_vertical(), direction) {
            (false, NavDirection::Prev) => Self::LeftArrow,
            (false, NavDirection::Next) => Self::RightArrow,
            (true, NavDirection::Prev) => Self::ChevronUp,
            (true, NavDirection::Next) => Self::ChevronDown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavIcon {
    Default(DefaultNavIcon),
    /// Host-supplied visual, carried as an opaque label/key.
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavAffordance {
    pub direction: NavDirection,
    pub icon: NavIcon,
    pub intent: NavigationIntent,
}

impl NavAffordance {
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self.icon, NavIcon::Default(_))
    }
}

/// What the navigation bar should draw this frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationFrame {
    pub orientation: Orientation,
    pub affordances: SmallVec<[NavAffordance; 2]>,
}

impl NavigationFrame {
    #[must_use]
    pub fn affordance(&self, direction: NavDirection) -> Option<&NavAffordance> {
        self.affordances
            .iter()
            .find(|affordance| affordance.direction == direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationControl {
    orientation: Orientation,
    nav_prev: Option<String>,
    nav_next: Option<String>,
}

impl NavigationControl {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            nav_prev: None,
            nav_next: None,
        }
    }

    /// Replaces the default icons; `None` keeps the built-in one.
    #[must_use]
    pub fn with_custom_icons(mut self, nav_prev: Option<String>, nav_next: Option<String>) -> Self {
        self.nav_prev = nav_prev;
        self.nav_next = nav_next;
        self
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Intent behind `direction`, or `None` when the affordance is not shown.
    #[must_use]
    pub fn intent_for(&self, direction: NavDirection) -> Option<NavigationIntent> {
        match (direction, self.orientation.is_vertical_scrollable()) {
            (NavDirection::Prev, true) => None,
            (NavDirection::Prev, false) => Some(NavigationIntent::PrevMonth),
            (NavDirection::Next, true) => Some(NavigationIntent::LoadMoreMonths),
            (NavDirection::Next, false) => Some(NavigationIntent::NextMonth),
        }
    }

    fn icon_for(&self, direction: NavDirection) -> NavIcon {
        let custom = match direction {
            NavDirection::Prev => &self.nav_prev,
            NavDirection::Next => &self.nav_next,
        };
        match custom {
            Some(label) => NavIcon::Custom(label.clone()),
            None => NavIcon::Default(DefaultNavIcon::for_direction(self.orientation, direction)),
        }
    }

    #[must_use]
    pub fn frame(&self) -> NavigationFrame {
        let affordances = [NavDirection::Prev, NavDirection::Next]
            .into_iter()
            .filter_map(|direction| {
                self.intent_for(direction).map(|intent| NavAffordance {
                    direction,
                    icon: self.icon_for(direction),
                    intent,
                })
            })
            .collect();
        NavigationFrame {
            orientation: self.orientation,
            affordances,
        }
    }
}
