//! Immutable lookup tables indexed by the LCG draw ordinal.

pub const OCEAN_SHIPWRECK_TYPES: [&str; 20] = [
    "upright",
    "upright_degraded",
    "sideways_full",
    "sideways_fronthalf",
    "sideways_backhalf",
    "sideways_full_degraded",
    "sideways_fronthalf_degraded",
    "sideways_backhalf_degraded",
    "with_mast",
    "with_mast_degraded",
    "rightsideup_full",
    "rightsideup_fronthalf",
    "rightsideup_backhalf",
    "rightsideup_full_degraded",
    "rightsideup_fronthalf_degraded",
    "rightsideup_backhalf_degraded",
    "upsidedown_full",
    "upsidedown_fronthalf",
    "upsidedown_backhalf",
    "upsidedown_full_degraded",
];

pub const BEACHED_SHIPWRECK_TYPES: [&str; 11] = [
    "upright",
    "upright_degraded",
    "sideways_full",
    "sideways_fronthalf",
    "sideways_backhalf",
    "sideways_full_degraded",
    "with_mast",
    "with_mast_degraded",
    "rightsideup_full",
    "rightsideup_full_degraded",
    "upsidedown_full",
];

pub const REGULAR_PORTAL_TYPES: [&str; 10] = [
    "portal_1",
    "portal_2",
    "portal_3",
    "portal_4",
    "portal_5",
    "portal_6",
    "portal_7",
    "portal_8",
    "portal_9",
    "portal_10",
];

pub const GIANT_PORTAL_TYPES: [&str; 3] = ["giant_portal_1", "giant_portal_2", "giant_portal_3"];

/// Keyed by the half-open upper bound of its `next_int(B)` interval.
pub struct VillagePieceEntry {
    pub upper_bound: i32,
    pub piece: &'static str,
    pub abandoned: bool,
}

macro_rules! village_pieces {
    ($($upper:expr => $piece:expr, $abandoned:expr;)+) => {
        &[$(VillagePieceEntry { upper_bound: $upper, piece: $piece, abandoned: $abandoned }),+]
    };
}

pub const PLAINS_PIECES: &[VillagePieceEntry] = village_pieces! {
    50 => "plains_fountain_01", false;
    100 => "plains_meeting_point_1", false;
    150 => "plains_meeting_point_2", false;
    200 => "plains_meeting_point_3", false;
    201 => "plains_fountain_01", true;
    202 => "plains_meeting_point_1", true;
    203 => "plains_meeting_point_2", true;
    204 => "plains_meeting_point_3", true;
};

pub const DESERT_PIECES: &[VillagePieceEntry] = village_pieces! {
    98 => "desert_meeting_point_1", false;
    196 => "desert_meeting_point_2", false;
    245 => "desert_meeting_point_3", false;
    247 => "desert_meeting_point_1", true;
    249 => "desert_meeting_point_2", true;
    250 => "desert_meeting_point_3", true;
};

pub const SAVANNA_PIECES: &[VillagePieceEntry] = village_pieces! {
    100 => "savanna_meeting_point_1", false;
    150 => "savanna_meeting_point_2", false;
    300 => "savanna_meeting_point_3", false;
    450 => "savanna_meeting_point_4", false;
    452 => "savanna_meeting_point_1", true;
    453 => "savanna_meeting_point_2", true;
    456 => "savanna_meeting_point_3", true;
    459 => "savanna_meeting_point_4", true;
};

pub const TAIGA_PIECES: &[VillagePieceEntry] = village_pieces! {
    49 => "taiga_meeting_point_1", false;
    98 => "taiga_meeting_point_2", false;
    99 => "taiga_meeting_point_1", true;
    100 => "taiga_meeting_point_2", true;
};

pub const SNOWY_PIECES: &[VillagePieceEntry] = village_pieces! {
    100 => "snowy_meeting_point_1", false;
    150 => "snowy_meeting_point_2", false;
    300 => "snowy_meeting_point_3", false;
    302 => "snowy_meeting_point_1", true;
    303 => "snowy_meeting_point_2", true;
    306 => "snowy_meeting_point_3", true;
};
