//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::MetricKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Activity, LuArrowUpRight as ArrowUpRight, LuBookOpen as BookOpen,
        LuClock as Clock, LuHeart as Heart, LuInfo as Info, LuLeaf as Leaf,
        LuLocateFixed as UserLocation, LuMapPin as MapPin, LuNavigation as Navigation,
        LuSlidersHorizontal as Filter,
    };
}

mod bootstrap {
    pub use icondata::{
        BsActivity as Activity, BsArrowUpRight as ArrowUpRight, BsBook as BookOpen,
        BsClock as Clock, BsCrosshair as UserLocation, BsFunnel as Filter,
        BsGeoAltFill as MapPin, BsHeart as Heart, BsInfoCircle as Info,
        BsSignpost2 as Navigation, BsTree as Leaf,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MAP_PIN, MapPin);
themed_icon!(CLOCK, Clock);
themed_icon!(FILTER, Filter);
themed_icon!(NAVIGATION, Navigation);
themed_icon!(INFO, Info);
themed_icon!(USER_LOCATION, UserLocation);
themed_icon!(LEAF, Leaf);
themed_icon!(ACTIVITY, Activity);
themed_icon!(HEART, Heart);
themed_icon!(BOOK_OPEN, BookOpen);
themed_icon!(ARROW_UP_RIGHT, ArrowUpRight);

/// Icon for a health metric kind.
pub fn metric_icon(kind: MetricKind) -> Icon {
    match kind {
        MetricKind::AirQuality => LEAF,
        MetricKind::Respiratory => ACTIVITY,
        MetricKind::CommunityHealth => HEART,
    }
}
