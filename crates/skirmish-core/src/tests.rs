#[cfg(test)]
mod tests {
    use crate::commands::{SimCommand, SpawnRequest};
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::SimError;
    use crate::state::{AgentView, SimSnapshot};
    use crate::types::{CellCoord, Position, SimTime, ViewRect};

    #[test]
    fn test_faction_opponent_is_involution() {
        for faction in Faction::ALL {
            assert_ne!(faction, faction.opponent());
            assert_eq!(faction, faction.opponent().opponent());
        }
        assert_eq!(Faction::Red.index(), 0);
        assert_eq!(Faction::Blue.index(), 1);
    }

    #[test]
    fn test_faction_from_str() {
        assert_eq!("red".parse::<Faction>().unwrap(), Faction::Red);
        assert_eq!("BLUE".parse::<Faction>().unwrap(), Faction::Blue);
        assert!("green".parse::<Faction>().is_err());
    }

    #[test]
    fn test_sim_phase_serde() {
        let variants = vec![
            SimPhase::Setup,
            SimPhase::Running,
            SimPhase::Paused,
            SimPhase::Over,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SimPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_wire_format() {
        let cmd = SimCommand::Spawn {
            faction_size: 250,
            user_faction: Faction::Blue,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"Spawn\""), "got {json}");
        let back: SimCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);

        let back: SimCommand = serde_json::from_str(r#"{"type":"TogglePause"}"#).unwrap();
        assert_eq!(back, SimCommand::TogglePause);
    }

    #[test]
    fn test_spawn_request_rejects_zero() {
        assert_eq!(
            SpawnRequest::new(0, Faction::Red),
            Err(SimError::InvalidFactionSize(0))
        );
        assert_eq!(
            SpawnRequest::new(MAX_FACTION_SIZE + 1, Faction::Red),
            Err(SimError::InvalidFactionSize(MAX_FACTION_SIZE + 1))
        );
    }

    #[test]
    fn test_spawn_request_into_command() {
        let request = SpawnRequest::new(12, Faction::Blue).unwrap();
        assert_eq!(request.faction_size(), 12);
        assert_eq!(request.user_faction(), Faction::Blue);
        assert_eq!(
            SimCommand::from(request),
            SimCommand::Spawn {
                faction_size: 12,
                user_faction: Faction::Blue
            }
        );
    }

    #[test]
    fn test_cell_coord_floors_negative_positions() {
        assert_eq!(CellCoord::of(&Position::new(0.0, 0.0)), CellCoord::new(0, 0));
        assert_eq!(CellCoord::of(&Position::new(31.9, 32.0)), CellCoord::new(0, 1));
        assert_eq!(
            CellCoord::of(&Position::new(-0.5, -32.5)),
            CellCoord::new(-1, -2),
            "negative coordinates must not share cell 0"
        );
    }

    #[test]
    fn test_neighborhood_is_3x3_without_duplicates() {
        let cells: Vec<CellCoord> = CellCoord::new(4, -2).neighborhood().collect();
        assert_eq!(cells.len(), 9);
        for dx in -1..=1 {
            for dy in -1..=1 {
                assert!(cells.contains(&CellCoord::new(4 + dx, -2 + dy)));
            }
        }
    }

    #[test]
    fn test_cell_size_covers_interaction_radii() {
        assert!(CELL_SIZE >= SEPARATION_DISTANCE);
        assert!(CELL_SIZE >= AGENT_RADIUS * 2.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance();
        time.advance();
        assert_eq!(time.tick, 2);
    }

    #[test]
    fn test_view_rect_centered_zoom() {
        let view = ViewRect::centered(Position::new(400.0, 300.0), 800.0, 600.0, 2.0);
        assert_eq!(view, ViewRect::new(200.0, 150.0, 400.0, 300.0));
        assert!(view.contains(&Position::new(400.0, 300.0)));
        assert!(!view.contains(&Position::new(100.0, 300.0)));
    }

    #[test]
    fn test_visible_agents_filters_off_screen() {
        let agent = |x: f32, faction| AgentView {
            faction,
            position: Position::new(x, 100.0),
            radius: AGENT_RADIUS,
            health: BASE_HEALTH,
        };
        let snapshot = SimSnapshot {
            agents: vec![
                agent(100.0, Faction::Red),
                agent(900.0, Faction::Red),
                agent(700.0, Faction::Blue),
            ],
            ..Default::default()
        };
        let view = ViewRect::default();
        let visible: Vec<_> = snapshot.visible_agents(&view).collect();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|a| a.position.x < VIEW_WIDTH));
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = SimSnapshot {
            phase: SimPhase::Running,
            user_faction: Some(Faction::Red),
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, SimPhase::Running);
        assert_eq!(back.user_faction, Some(Faction::Red));
        assert!(!back.is_over());
    }
}
