#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::{check_health, check_probability, SimError};
    use crate::events::SimEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Arena, Extent, Position, SimTime};

    // ---- Geometry ----

    #[test]
    fn test_bounding_boxes_overlap() {
        let a = Extent::new(10.0, 10.0).bounds_at(Position::new(0.0, 0.0));
        let b = Extent::new(10.0, 10.0).bounds_at(Position::new(5.0, 5.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_bounding_boxes_touching_edges_intersect() {
        let a = Extent::new(10.0, 10.0).bounds_at(Position::new(0.0, 0.0));
        let b = Extent::new(10.0, 10.0).bounds_at(Position::new(10.0, 0.0));
        assert!(a.intersects(&b), "Shared edge counts as contact");
    }

    #[test]
    fn test_bounding_boxes_disjoint() {
        let a = Extent::new(10.0, 10.0).bounds_at(Position::new(0.0, 0.0));
        let b = Extent::new(10.0, 10.0).bounds_at(Position::new(10.5, 0.0));
        let c = Extent::new(10.0, 10.0).bounds_at(Position::new(0.0, 20.0));
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_arena_outside_detection() {
        let arena = Arena::new(100.0, 50.0);
        let extent = Extent::new(10.0, 10.0);

        // Spawned flush against the right edge is still inside.
        assert!(!arena.is_outside(&extent.bounds_at(Position::new(100.0, 10.0))));
        assert!(arena.is_outside(&extent.bounds_at(Position::new(100.5, 10.0))));
        assert!(arena.is_outside(&extent.bounds_at(Position::new(-10.5, 10.0))));
        assert!(arena.is_outside(&extent.bounds_at(Position::new(10.0, 51.0))));
        // Partially off the top is still inside.
        assert!(!arena.is_outside(&extent.bounds_at(Position::new(10.0, -5.0))));
    }

    #[test]
    fn test_arena_clamp_keeps_extent_inside() {
        let arena = Arena::new(100.0, 50.0);
        let extent = Extent::new(10.0, 20.0);
        let clamped = arena.clamp(Position::new(95.0, -3.0), extent);
        assert_eq!(clamped, Position::new(90.0, 0.0));

        let clamped = arena.clamp(Position::new(-1.0, 45.0), extent);
        assert_eq!(clamped, Position::new(0.0, 30.0));
    }

    #[test]
    fn test_default_arena_is_reference_screen() {
        let arena = Arena::default();
        assert_eq!(arena.width, ORIGINAL_SCREEN_WIDTH);
        assert_eq!(arena.height, ORIGINAL_SCREEN_HEIGHT);
    }

    #[test]
    fn test_arena_validation() {
        assert!(Arena::default().validate().is_ok());
        assert_eq!(
            Arena::new(0.0, 10.0).validate(),
            Err(SimError::InvalidBounds {
                width: 0.0,
                height: 10.0
            })
        );
        assert!(Arena::new(10.0, f64::INFINITY).validate().is_err());
        assert!(Arena::new(f64::NAN, 10.0).validate().is_err());
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!(
            (time.elapsed_secs - 1.0).abs() < 1e-9,
            "{} ticks should equal one second, got {}",
            TICK_RATE,
            time.elapsed_secs
        );
    }

    // ---- Enums ----

    #[test]
    fn test_enemy_craft_classification() {
        assert!(ActorKind::Enemy.is_enemy_craft());
        assert!(ActorKind::Boss.is_enemy_craft());
        assert!(!ActorKind::Player.is_enemy_craft());
        assert!(!ActorKind::StraightProjectile.is_enemy_craft());
        assert!(ActorKind::HomingProjectile.is_projectile());
    }

    #[test]
    fn test_group_order_matches_indices() {
        for (i, group) in Group::ALL.iter().enumerate() {
            assert_eq!(group.index(), i);
        }
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!LevelPhase::Running.is_terminal());
        assert!(LevelPhase::Won.is_terminal());
        assert!(LevelPhase::Lost.is_terminal());
        assert!(LevelPhase::Restarted.is_terminal());
    }

    /// The wire names are what external level controllers match on.
    #[test]
    fn test_transition_identifiers() {
        for t in [
            Transition::AdvanceLevel,
            Transition::GameOver,
            Transition::Restart,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            let back: Transition = serde_json::from_str(&json).unwrap();
            assert_eq!(t, back);
        }
    }

    #[test]
    fn test_objective_json_shape() {
        let kill: Objective = serde_json::from_str(r#"{"type":"kill_count","target":10}"#).unwrap();
        assert_eq!(kill, Objective::KillCount { target: 10 });

        let boss: Objective = serde_json::from_str(r#"{"type":"defeat_boss"}"#).unwrap();
        assert_eq!(boss, Objective::DefeatBoss);
    }

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Move {
                direction: Direction::Up,
            },
            PlayerCommand::Stop {
                axis: Axis::Horizontal,
            },
            PlayerCommand::Fire,
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    // ---- Errors ----

    #[test]
    fn test_probability_check() {
        assert!(check_probability("p", 0.0).is_ok());
        assert!(check_probability("p", 1.0).is_ok());
        assert_eq!(
            check_probability("spawn_probability", 1.5),
            Err(SimError::InvalidProbability {
                field: "spawn_probability",
                value: 1.5
            })
        );
        assert!(check_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn test_health_check() {
        assert!(check_health("player_health", 1).is_ok());
        let err = check_health("player_health", 0).unwrap_err();
        assert_eq!(err.to_string(), "player_health must be positive, got 0");
    }

    // ---- Snapshot ----

    #[test]
    fn test_snapshot_serializes_with_events() {
        let snapshot = GameStateSnapshot {
            level_name: "Level 1".into(),
            events: vec![
                SimEvent::ShieldRaised,
                SimEvent::LevelFinished {
                    transition: Transition::GameOver,
                },
            ],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"type\":\"ShieldRaised\""));
        assert!(json.contains("game-over"));

        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events, snapshot.events);
        assert_eq!(back.level_name, "Level 1");
    }
}
