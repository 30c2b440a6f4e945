#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise90,
    Clockwise180,
    CounterClockwise90,
}

impl Rotation {
    pub const fn from_ordinal(ordinal: i32) -> Self {
        match ordinal.rem_euclid(4) {
            0 => Rotation::None,
            1 => Rotation::Clockwise90,
            2 => Rotation::Clockwise180,
            _ => Rotation::CounterClockwise90,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Some(Rotation::None),
            "CLOCKWISE_90" => Some(Rotation::Clockwise90),
            "CLOCKWISE_180" => Some(Rotation::Clockwise180),
            "COUNTERCLOCKWISE_90" => Some(Rotation::CounterClockwise90),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    None,
    FrontBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiomeCategory {
    Mountains = 1,
    Desert = 2,
    Jungle = 3,
}

impl BiomeCategory {
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(BiomeCategory::Mountains),
            2 => Some(BiomeCategory::Desert),
            3 => Some(BiomeCategory::Jungle),
            _ => None,
        }
    }
}

/// `biome_id` ordering isn't pinned by an external authority; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VillageType {
    Plains = 1,
    Snowy = 2,
    Taiga = 3,
    Savanna = 4,
    Desert = 5,
}

impl VillageType {
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(VillageType::Plains),
            2 => Some(VillageType::Snowy),
            3 => Some(VillageType::Taiga),
            4 => Some(VillageType::Savanna),
            5 => Some(VillageType::Desert),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipwreckConstraint {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub rotation: Rotation,
    pub shipwreck_type: String,
    pub is_beached: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConstraint {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub rotation: Rotation,
    pub mirror: Mirror,
    pub portal_type: String,
    pub biome_category: BiomeCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillageConstraint {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub rotation: Rotation,
    pub start_piece: String,
    pub village_type: VillageType,
    pub is_abandoned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Shipwreck(ShipwreckConstraint),
    Portal(PortalConstraint),
    Village(VillageConstraint),
}

impl Constraint {
    pub const fn chunk_pos(&self) -> (i32, i32) {
        match self {
            Constraint::Shipwreck(c) => (c.chunk_x, c.chunk_z),
            Constraint::Portal(c) => (c.chunk_x, c.chunk_z),
            Constraint::Village(c) => (c.chunk_x, c.chunk_z),
        }
    }

    pub const fn is_shipwreck(&self) -> bool {
        matches!(self, Constraint::Shipwreck(_))
    }

    pub const fn is_portal(&self) -> bool {
        matches!(self, Constraint::Portal(_))
    }
}
