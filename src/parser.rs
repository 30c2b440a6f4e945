use crate::constraint::{
    BiomeCategory, Constraint, Mirror, PortalConstraint, Rotation, ShipwreckConstraint,
    VillageConstraint, VillageType,
};

pub struct ParseOutcome {
    pub constraints: Vec<Constraint>,
    pub pillar_seed: Option<u32>,
    pub warnings: Vec<String>,
}

pub fn parse(text: &str) -> ParseOutcome {
    let mut constraints = Vec::new();
    let mut pillar_seed = None;
    let mut warnings = Vec::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if !line.contains(',') {
            if let Ok(p) = line.parse::<u32>() {
                pillar_seed = Some(p);
                continue;
            }
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        match dispatch(&fields) {
            Some(c) => constraints.push(c),
            None => warnings.push(format!("line {}: malformed, skipping: {line}", lineno + 1)),
        }
    }

    ParseOutcome {
        constraints,
        pillar_seed,
        warnings,
    }
}

fn dispatch(fields: &[&str]) -> Option<Constraint> {
    parse_shipwreck(fields)
        .or_else(|| parse_portal(fields))
        .or_else(|| parse_village(fields))
}

fn yes_no(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

fn chunk_and_rotation(fields: &[&str]) -> Option<(i32, i32, Rotation)> {
    let cx = fields.first()?.parse().ok()?;
    let cz = fields.get(1)?.parse().ok()?;
    let rot = Rotation::parse(fields.get(2)?)?;
    Some((cx, cz, rot))
}

fn parse_shipwreck(fields: &[&str]) -> Option<Constraint> {
    if fields.len() != 5 {
        return None;
    }
    let (cx, cz, rot) = chunk_and_rotation(fields)?;
    let shipwreck_type = fields[3].to_string();
    let is_beached = match fields[4].to_ascii_lowercase().as_str() {
        "ocean" => false,
        "beached" => true,
        _ => return None,
    };
    Some(Constraint::Shipwreck(ShipwreckConstraint {
        chunk_x: cx,
        chunk_z: cz,
        rotation: rot,
        shipwreck_type,
        is_beached,
    }))
}

fn parse_portal(fields: &[&str]) -> Option<Constraint> {
    if fields.len() != 6 {
        return None;
    }
    let (cx, cz, rot) = chunk_and_rotation(fields)?;
    let portal_type = fields[3].to_string();
    let mirror = if yes_no(fields[4])? {
        Mirror::FrontBack
    } else {
        Mirror::None
    };
    let biome_id: u8 = fields[5].parse().ok()?;
    let biome_category = BiomeCategory::from_id(biome_id)?;
    Some(Constraint::Portal(PortalConstraint {
        chunk_x: cx,
        chunk_z: cz,
        rotation: rot,
        mirror,
        portal_type,
        biome_category,
    }))
}

fn parse_village(fields: &[&str]) -> Option<Constraint> {
    if fields.len() != 5 && fields.len() != 6 {
        return None;
    }
    let (cx, cz, rot) = chunk_and_rotation(fields)?;
    let start_piece = fields[3].to_string();
    let village_id: u8 = fields[4].parse().ok()?;
    let village_type = VillageType::from_id(village_id)?;
    let is_abandoned = match fields.get(5) {
        Some(token) => yes_no(token)?,
        None => false,
    };
    Some(Constraint::Village(VillageConstraint {
        chunk_x: cx,
        chunk_z: cz,
        rotation: rot,
        start_piece,
        village_type,
        is_abandoned,
    }))
}
