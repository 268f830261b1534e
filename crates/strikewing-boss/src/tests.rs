#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use strikewing_core::constants::*;
    use strikewing_core::enums::{ProjectileKind, ShieldState};
    use strikewing_core::error::SimError;

    use crate::brain::BossBrain;
    use crate::pattern::{MovementPattern, PatrolBand};
    use crate::profiles::BossProfile;
    use crate::shield::{ShieldChange, ShieldController, ShieldHit};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn counts(moves: &[i32]) -> (usize, usize, usize) {
        let up = moves.iter().filter(|&&m| m < 0).count();
        let down = moves.iter().filter(|&&m| m > 0).count();
        let stay = moves.iter().filter(|&&m| m == 0).count();
        (up, down, stay)
    }

    // ---- Movement pattern ----

    #[test]
    fn test_pattern_holds_equal_copies_of_each_move() {
        let pattern = MovementPattern::new(8, 5, 10, &mut rng());
        assert_eq!(pattern.moves().len(), 15);
        assert_eq!(counts(pattern.moves()), (5, 5, 5));
    }

    #[test]
    fn test_pattern_advances_after_max_frames() {
        let mut rng = rng();
        let mut pattern = MovementPattern::new(8, 5, 10, &mut rng);

        for frame in 1..10 {
            pattern.next_move(&mut rng);
            assert_eq!(pattern.index(), 0);
            assert_eq!(pattern.frames_on_move(), frame);
        }
        pattern.next_move(&mut rng);
        assert_eq!(pattern.index(), 1, "Index advances on the tenth frame");
        assert_eq!(pattern.frames_on_move(), 0);
    }

    #[test]
    fn test_pattern_wraps_and_keeps_multiset() {
        let mut rng = rng();
        let mut pattern = MovementPattern::new(8, 5, 10, &mut rng);

        // One full pass over 15 entries, 10 frames each.
        for _ in 0..150 {
            let m = pattern.next_move(&mut rng);
            assert!(m == 8 || m == -8 || m == 0, "Unexpected move {m}");
        }
        assert_eq!(pattern.index(), 0, "Index wraps to the start");
        assert_eq!(
            counts(pattern.moves()),
            (5, 5, 5),
            "Reshuffling must not change the multiset"
        );
    }

    #[test]
    fn test_empty_pattern_stays_still() {
        let mut rng = rng();
        let mut pattern = MovementPattern::new(8, 0, 10, &mut rng);
        assert_eq!(pattern.next_move(&mut rng), 0);
    }

    // ---- Patrol band ----

    #[test]
    fn test_band_for_reference_height() {
        let band = PatrolBand::for_height(ORIGINAL_SCREEN_HEIGHT);
        assert_eq!(band.upper, BOSS_Y_UPPER_BOUND);
        assert_eq!(band.lower, ORIGINAL_SCREEN_HEIGHT - BOSS_Y_LOWER_MARGIN);
    }

    #[test]
    fn test_band_scales_upper_bound() {
        let band = PatrolBand::for_height(1500.0);
        assert_eq!(band.upper, -200.0);
        assert_eq!(band.lower, 1400.0);
    }

    #[test]
    fn test_step_reverts_instead_of_clamping() {
        let band = PatrolBand::new(0.0, 100.0);
        assert_eq!(band.step(50.0, 8.0), 58.0);
        // 96 + 8 overshoots: stays at 96 rather than snapping to 100.
        assert_eq!(band.step(96.0, 8.0), 96.0);
        assert_eq!(band.step(4.0, -8.0), 4.0);
        // Landing exactly on the bound is allowed.
        assert_eq!(band.step(92.0, 8.0), 100.0);
    }

    // ---- Shield ----

    fn profile_with_shield(probability: f64, duration: u32, health: u32) -> BossProfile {
        BossProfile {
            shield_probability: probability,
            shield_duration_frames: duration,
            shield_health: health,
            ..BossProfile::default()
        }
    }

    #[test]
    fn test_shield_routes_damage_until_pool_empty() {
        let mut shield = ShieldController::new(&profile_with_shield(0.0, 500, 2));
        shield.raise();

        assert_eq!(shield.absorb(1), Some(ShieldHit::Absorbed));
        assert_eq!(shield.health(), 1);
        assert_eq!(shield.absorb(1), Some(ShieldHit::Broken));
        assert_eq!(shield.state(), ShieldState::Unshielded);
        assert_eq!(shield.absorb(1), None, "Third hit belongs to the hull");
    }

    #[test]
    fn test_shield_never_raises_at_zero_probability() {
        let mut rng = rng();
        let mut shield = ShieldController::new(&profile_with_shield(0.0, 500, 5));
        for _ in 0..10_000 {
            assert_eq!(shield.update(&mut rng), None);
        }
        assert!(!shield.is_active());
    }

    #[test]
    fn test_shield_expires_after_duration() {
        let mut rng = rng();
        let mut shield = ShieldController::new(&profile_with_shield(1.0, 500, 5));

        assert_eq!(shield.update(&mut rng), Some(ShieldChange::Raised));
        assert_eq!(shield.frames(), 0);
        for _ in 0..499 {
            assert_eq!(shield.update(&mut rng), None);
        }
        assert_eq!(shield.frames(), 499);
        assert_eq!(shield.update(&mut rng), Some(ShieldChange::Expired));
        assert!(!shield.is_active());
    }

    #[test]
    fn test_shield_expires_even_without_absorbing() {
        let mut rng = rng();
        let mut shield = ShieldController::new(&profile_with_shield(0.0, 3, 5));
        shield.raise();
        let changes: Vec<_> = (0..3).map(|_| shield.update(&mut rng)).collect();
        assert_eq!(changes, vec![None, None, Some(ShieldChange::Expired)]);
        assert_eq!(shield.health(), 0);
    }

    #[test]
    fn test_shield_pool_refilled_on_reactivation() {
        let mut rng = rng();
        let mut shield = ShieldController::new(&profile_with_shield(1.0, 1, 5));

        assert_eq!(shield.update(&mut rng), Some(ShieldChange::Raised));
        assert_eq!(shield.absorb(1), Some(ShieldHit::Absorbed));
        assert_eq!(shield.health(), 4);
        assert_eq!(shield.update(&mut rng), Some(ShieldChange::Expired));
        assert_eq!(shield.update(&mut rng), Some(ShieldChange::Raised));
        assert_eq!(shield.health(), 5, "Each activation starts with a full pool");
    }

    // ---- Brain ----

    #[test]
    fn test_boss_stays_in_band_for_10000_ticks() {
        let mut rng = rng();
        let band = PatrolBand::for_height(ORIGINAL_SCREEN_HEIGHT);
        let mut brain = BossBrain::new(&BossProfile::default(), band, &mut rng);
        let mut y = ORIGINAL_SCREEN_HEIGHT / 2.0;

        for tick in 0..10_000 {
            y = brain.step(y, &mut rng).y;
            assert!(
                band.contains(y),
                "Boss left band at tick {tick}: y={y}, band={band:?}"
            );
        }
    }

    #[test]
    fn test_boss_in_narrow_band_bounces_in_place() {
        let mut rng = rng();
        let band = PatrolBand::new(0.0, 10.0);
        let mut brain = BossBrain::new(&BossProfile::default(), band, &mut rng);
        // Every +-8 move from 5 leaves [0, 10], so the boss never moves.
        for _ in 0..1_000 {
            assert_eq!(brain.step(5.0, &mut rng).y, 5.0);
        }
    }

    #[test]
    fn test_brain_reports_shield_changes() {
        let mut rng = rng();
        let profile = profile_with_shield(1.0, 2, 5);
        let mut brain = BossBrain::new(&profile, PatrolBand::new(-100.0, 650.0), &mut rng);
        let changes: Vec<_> = (0..4).map(|_| brain.step(300.0, &mut rng).shield).collect();
        assert_eq!(
            changes,
            vec![
                Some(ShieldChange::Raised),
                None,
                Some(ShieldChange::Expired),
                Some(ShieldChange::Raised),
            ]
        );
    }

    // ---- Profiles ----

    #[test]
    fn test_default_profile_matches_constants() {
        let profile = BossProfile::default();
        assert_eq!(profile.health, BOSS_HEALTH);
        assert_eq!(profile.fire_rate, BOSS_FIRE_RATE);
        assert_eq!(profile.weapon, ProjectileKind::Straight);
        assert!(profile.validate().is_ok());
        assert_eq!(BossProfile::homing().weapon, ProjectileKind::Homing);
    }

    #[test]
    fn test_partial_profile_json_uses_defaults() {
        let profile: BossProfile =
            serde_json::from_str(r#"{"health": 30, "weapon": "homing"}"#).unwrap();
        assert_eq!(profile.health, 30);
        assert_eq!(profile.weapon, ProjectileKind::Homing);
        assert_eq!(profile.shield_duration_frames, BOSS_SHIELD_DURATION_FRAMES);
    }

    #[test]
    fn test_profile_validation() {
        let bad_rate = BossProfile {
            fire_rate: 1.5,
            ..BossProfile::default()
        };
        assert_eq!(
            bad_rate.validate(),
            Err(SimError::InvalidProbability {
                field: "boss.fire_rate",
                value: 1.5
            })
        );

        let dead = BossProfile {
            health: 0,
            ..BossProfile::default()
        };
        assert!(matches!(
            dead.validate(),
            Err(SimError::InvalidHealth { field: "boss.health", .. })
        ));
    }
}
