//! Conversion of map zoom levels into address ranks.
//!
//! Reverse lookups take a `zoom` parameter the same way map tiles do. Internally
//! the search works on address ranks, so the zoom is translated into the finest
//! address rank still shown at that zoom.

use std::fmt;

/// Highest zoom level understood. Larger values are treated as this one.
pub const MAX_ZOOM: i64 = 18;

/// Finest address rank per zoom level, indexed by zoom.
pub const REVERSE_MAX_RANKS: [u8; 19] = [
    2, 2, 2, // 0-2   Continent/Sea
    4, 4,  // 3-4   Country
    8,  // 5     State
    10, 10, // 6-7   Region
    12, 12, // 8-9   County
    16, 17, // 10-11 City
    18, // 12    Town
    19, // 13    Village/Suburb
    22, // 14    Hamlet/Neighbourhood
    25, // 15    Localities
    26, // 16    Major Streets
    27, // 17    Minor Streets
    30, // 18    Building
];

fn clamp_zoom(zoom: i64) -> usize {
    // Clamped into 0..=18, so the cast is lossless.
    zoom.clamp(0, MAX_ZOOM) as usize
}

/// Convert a zoom parameter into the maximum address rank for that zoom.
///
/// Any integer is accepted: values below 0 are treated as zoom 0 and values
/// above 18 as zoom 18.
///
/// # Examples
///
/// ```rust
/// use geosieve::zoom_to_rank;
///
/// assert_eq!(zoom_to_rank(12), 18);
/// assert_eq!(zoom_to_rank(-5), 2);
/// assert_eq!(zoom_to_rank(100), 30);
/// ```
#[must_use]
pub fn zoom_to_rank(zoom: i64) -> u8 {
    REVERSE_MAX_RANKS[clamp_zoom(zoom)]
}

/// What kind of feature a zoom level is meant to show.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomBand {
    ContinentOrSea,
    Country,
    State,
    Region,
    County,
    City,
    Town,
    VillageOrSuburb,
    HamletOrNeighbourhood,
    Localities,
    MajorStreets,
    MinorStreets,
    Building,
}

impl fmt::Display for ZoomBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ContinentOrSea => "Continent/Sea",
            Self::Country => "Country",
            Self::State => "State",
            Self::Region => "Region",
            Self::County => "County",
            Self::City => "City",
            Self::Town => "Town",
            Self::VillageOrSuburb => "Village/Suburb",
            Self::HamletOrNeighbourhood => "Hamlet/Neighbourhood",
            Self::Localities => "Localities",
            Self::MajorStreets => "Major Streets",
            Self::MinorStreets => "Minor Streets",
            Self::Building => "Building",
        };
        f.write_str(label)
    }
}

/// Returns the band a zoom level belongs to, clamping like [`zoom_to_rank`].
#[must_use]
pub fn zoom_band(zoom: i64) -> ZoomBand {
    match clamp_zoom(zoom) {
        0..=2 => ZoomBand::ContinentOrSea,
        3 | 4 => ZoomBand::Country,
        5 => ZoomBand::State,
        6 | 7 => ZoomBand::Region,
        8 | 9 => ZoomBand::County,
        10 | 11 => ZoomBand::City,
        12 => ZoomBand::Town,
        13 => ZoomBand::VillageOrSuburb,
        14 => ZoomBand::HamletOrNeighbourhood,
        15 => ZoomBand::Localities,
        16 => ZoomBand::MajorStreets,
        17 => ZoomBand::MinorStreets,
        _ => ZoomBand::Building,
    }
}
