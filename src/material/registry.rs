use rand::Rng;

use super::{Color, Material, MaterialId, Phase};
use crate::constants::display::BACKGROUND;

/// Process-wide material table, indexed by `MaterialId`
static MATERIALS: [Material; MaterialId::COUNT] = [
    Material {
        id: MaterialId::Air,
        density: 1.2,
        viscosity: 1.0,
        phase: Phase::Gas,
        color: Color::from_array(BACKGROUND),
    },
    Material {
        id: MaterialId::Water,
        density: 1000.0,
        viscosity: 6.0,
        phase: Phase::Liquid,
        color: Color::rgba(0, 121, 241, 255),
    },
    Material {
        id: MaterialId::Smoke,
        density: 1.1,
        viscosity: 2.0,
        phase: Phase::Gas,
        color: Color::rgba(130, 130, 130, 255),
    },
    Material {
        id: MaterialId::Sand,
        density: 1800.0,
        viscosity: 0.0,
        phase: Phase::Solid,
        color: Color::rgba(253, 249, 0, 255),
    },
];

/// Get the definition of a material
pub fn lookup(id: MaterialId) -> Material {
    MATERIALS[id.index()]
}

/// Pick a material uniformly from the registry
pub fn random_material<R: Rng + ?Sized>(rng: &mut R) -> Material {
    MATERIALS[rng.gen_range(0..MaterialId::COUNT)]
}

/// All registered materials in table order
pub fn all() -> &'static [Material] {
    &MATERIALS
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_table_matches_ids() {
        for id in MaterialId::ALL {
            assert_eq!(lookup(id).id, id);
        }
        assert_eq!(all().len(), MaterialId::COUNT);
    }

    #[test]
    fn test_density_ordering() {
        let air = lookup(MaterialId::Air);
        let smoke = lookup(MaterialId::Smoke);
        let water = lookup(MaterialId::Water);
        let sand = lookup(MaterialId::Sand);

        assert!(smoke.density < air.density);
        assert!(air.density < water.density);
        assert!(water.density < sand.density);
    }

    #[test]
    fn test_default_id_is_air() {
        assert_eq!(MaterialId::default(), MaterialId::Air);
        assert_eq!(lookup(MaterialId::default()).id, MaterialId::Air);
    }

    #[test]
    fn test_phases() {
        assert!(lookup(MaterialId::Air).is_gas());
        assert!(lookup(MaterialId::Smoke).is_gas());
        assert!(lookup(MaterialId::Water).is_liquid());
        assert!(lookup(MaterialId::Sand).is_solid());
    }

    #[test]
    fn test_air_uses_background_color() {
        assert_eq!(lookup(MaterialId::Air).color.to_array(), BACKGROUND);
    }

    #[test]
    fn test_random_material_covers_registry() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; MaterialId::COUNT];
        for _ in 0..1000 {
            seen[random_material(&mut rng).id.index()] = true;
        }
        assert!(seen.iter().all(|s| *s), "every material should be drawn: {:?}", seen);
    }
}
