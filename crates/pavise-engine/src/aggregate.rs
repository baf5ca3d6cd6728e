//! Quorum aggregation: raw per-ray powers to a sub-square cover tier.

use crate::resolve::RayRaw;
use pavise_core::TierTable;
use pavise_geom::Category;

/// Aggregate one target sub-square's corner-ray results into a tier.
///
/// For every non-zero tier `t` and every category, count the corner
/// rays whose category raw equals `t` **exactly** and look the count up
/// in `t`'s quorum table; the sub-square's value is the max over tiers,
/// then over categories.
///
/// Exact-equality counting means an obstacle of power 3 does not feed
/// tier 2's quorum count — with mixed-power obstacle sets on one ray
/// fan this can grant less cover than "at least" counting would. That
/// is the reference behavior, kept deliberately.
pub fn cell_cover(rays: &[RayRaw], tiers: &TierTable) -> usize {
    let mut total = 0;
    for category in Category::ALL {
        let mut category_cover = 0;
        for (t, tier) in tiers.tiers().iter().enumerate().skip(1) {
            let blocked = rays.iter().filter(|r| r.of(category) == t).count();
            category_cover = category_cover.max(tier.quorum.grant(blocked));
        }
        total = total.max(category_cover);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls(values: [usize; 4]) -> Vec<RayRaw> {
        values
            .into_iter()
            .map(|w| RayRaw {
                tiles: 0,
                occupants: 0,
                walls: w,
            })
            .collect()
    }

    #[test]
    fn unblocked_rays_grant_nothing() {
        let tiers = TierTable::dnd5e();
        assert_eq!(cell_cover(&walls([0, 0, 0, 0]), &tiers), 0);
    }

    #[test]
    fn two_of_four_rays_at_power_two_grant_tier_one() {
        // Three-quarters cover (power 2) has quorum [0,1,1,2,2]:
        // 2 blocked corner rays grant tier 1.
        let tiers = TierTable::dnd5e();
        assert_eq!(cell_cover(&walls([2, 2, 0, 0]), &tiers), 1);
    }

    #[test]
    fn all_four_rays_at_power_two_grant_tier_two() {
        let tiers = TierTable::dnd5e();
        assert_eq!(cell_cover(&walls([2, 2, 2, 2]), &tiers), 2);
    }

    #[test]
    fn full_power_blocks_reach_full_cover() {
        let tiers = TierTable::dnd5e();
        assert_eq!(cell_cover(&walls([3, 3, 3, 3]), &tiers), 3);
    }

    #[test]
    fn counting_is_exact_not_at_least() {
        // Four rays blocked at power 3 feed only tier 3's table; tier 2
        // counts zero rays even though 3 >= 2.
        let tiers = TierTable::dnd5e();
        let rays = walls([3, 3, 0, 0]);
        // Tier 3 quorum [0,1,1,2,3] at count 2 -> 1; tier 2 sees none.
        assert_eq!(cell_cover(&rays, &tiers), 1);
    }

    #[test]
    fn categories_aggregate_independently_then_max() {
        let tiers = TierTable::dnd5e();
        let rays: Vec<RayRaw> = (0..4)
            .map(|i| RayRaw {
                tiles: if i < 2 { 2 } else { 0 },  // 2 rays at power 2 -> 1
                occupants: 1,                      // 4 rays at power 1 -> 1
                walls: if i < 3 { 2 } else { 0 },  // 3 rays at power 2 -> 2
            })
            .collect();
        assert_eq!(cell_cover(&rays, &tiers), 2);
    }

    #[test]
    fn tier_zero_never_contributes() {
        // All rays clear: the no-cover tier's zero table must not be
        // consulted in a way that grants anything.
        let tiers = TierTable::dnd5e();
        assert_eq!(cell_cover(&walls([0, 0, 0, 0]), &tiers), 0);
    }
}
