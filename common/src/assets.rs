use bevy_math::Vec3;

// ============================================================================
// Asset Descriptors
// ============================================================================

// Axis-aligned box in asset-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    // Smallest box containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

// One placeable asset: a name plus the visual bounds of each of its
// sub-parts, all relative to the asset's own origin. The origin is whatever
// the asset was authored around and rarely sits on the visual base, which is
// why placement calibrates instances vertically.
#[derive(Debug, Clone)]
pub struct AssetSpec {
    pub name: String,
    pub parts: Vec<Bounds>,
}

impl AssetSpec {
    #[must_use]
    pub fn new(name: &str, parts: Vec<Bounds>) -> Self {
        Self {
            name: name.to_owned(),
            parts,
        }
    }

    // Union of all sub-part bounds; `None` when the asset has no visual
    // geometry at all.
    #[must_use]
    pub fn combined_bounds(&self) -> Option<Bounds> {
        let mut parts = self.parts.iter();
        let first = *parts.next()?;
        Some(parts.fold(first, |acc, b| acc.union(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_bounds_unions_all_parts() {
        let asset = AssetSpec::new(
            "two_part",
            vec![
                Bounds::new(Vec3::new(-1.0, -0.5, -1.0), Vec3::new(1.0, 2.0, 1.0)),
                Bounds::new(Vec3::new(-0.2, -1.5, -0.2), Vec3::new(0.2, 0.0, 0.2)),
            ],
        );
        let bounds = asset.combined_bounds().unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -1.5, -1.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn empty_asset_has_no_bounds() {
        let asset = AssetSpec::new("placeholder", Vec::new());
        assert!(asset.combined_bounds().is_none());
    }
}
