use crate::actions::*;
use crate::military::ranking::*;
use crate::pathing::movement::*;
use crate::planner::plan::*;
use crate::planner::template::*;
use crate::posture::selector::*;
use crate::posture::statistics::*;
use crate::settings::*;
use crate::snapshot::*;
use log::*;
use serde::Serialize;

/// What the controller did on one tick.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickReport {
    pub tick: u32,
    /// Absent when either flag is unknown.
    pub decision: Option<PostureDecision>,
    pub result: MoveResult,
}

struct Players {
    me: PlayerInfo,
    enemy: PlayerInfo,
}

/// Plans once, then picks and advances a goal list every tick.
pub struct Controller {
    settings: TacticsSettings,
    template: RoleTemplate,
    ranking: Box<dyn TargetRanking>,
    selector: PostureSelector,
    players: Option<Players>,
    plan: Plan,
}

impl Controller {
    pub fn new(settings: TacticsSettings) -> Controller {
        Controller {
            settings,
            template: RoleTemplate::default(),
            ranking: Box::new(ValueRanking::default()),
            selector: PostureSelector::new(),
            players: None,
            plan: Plan::default(),
        }
    }

    pub fn with_template(mut self, template: RoleTemplate) -> Controller {
        self.template = template;
        self
    }

    pub fn with_ranking(mut self, ranking: Box<dyn TargetRanking>) -> Controller {
        self.ranking = ranking;
        self
    }

    pub fn settings(&self) -> &TacticsSettings {
        &self.settings
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn selector(&self) -> &PostureSelector {
        &self.selector
    }

    pub fn is_planned(&self) -> bool {
        self.players.is_some()
    }

    fn prepare(&mut self, snapshot: &WorldSnapshot) {
        let players = Players {
            me: PlayerInfo::collect(snapshot, true),
            enemy: PlayerInfo::collect(snapshot, false),
        };

        info!(
            "Tick {}: {} own creeps, {} own towers, {} enemy creeps",
            snapshot.tick(),
            players.me.creeps.len(),
            players.me.towers.len(),
            players.enemy.creeps.len()
        );

        self.plan = Plan::build(snapshot, &players.me, &self.template, &self.settings);
        self.players = Some(players);
    }

    pub fn tick(&mut self, snapshot: &WorldSnapshot, actuator: &mut dyn Actuator) -> TickReport {
        if self.players.is_none() {
            self.prepare(snapshot);
        }

        let tick = snapshot.tick();
        let mut ctx = TickContext::new(snapshot, actuator, self.ranking.as_ref(), &self.settings);

        let mut result = self.plan.unexpected_mut().advance("unexpected", &mut ctx, MoveOptions::empty());

        let (my_flag, enemy_flag) = match (self.plan.my_flag(), self.plan.enemy_flag()) {
            (Some(my_flag), Some(enemy_flag)) => (my_flag, enemy_flag),
            _ => {
                return TickReport {
                    tick,
                    decision: None,
                    result,
                }
            }
        };

        let enemy = match self.players.as_ref() {
            Some(players) => &players.enemy,
            None => {
                return TickReport {
                    tick,
                    decision: None,
                    result,
                }
            }
        };

        let ticks_remaining = self.settings.ticks_remaining(tick);

        let inputs = PostureInputs {
            tick,
            flag_distance: my_flag.get_range_to(enemy_flag),
            enemy_offence: PositionStatistics::for_creeps_and_position(enemy.operational_creeps(snapshot), my_flag, ticks_remaining),
            enemy_defence: PositionStatistics::for_creeps_and_position(enemy.operational_creeps(snapshot), enemy_flag, ticks_remaining),
        };

        let decision = self.selector.select(&self.settings, &inputs);

        let posture_result = self.plan.goals_for(decision.posture).advance(decision.posture.name(), &mut ctx, MoveOptions::empty());

        if posture_result != MoveResult::Success {
            debug!("Tick {}: {} returned {}", tick, decision.posture, posture_result);
        }

        result = result.worst(posture_result);

        TickReport {
            tick,
            decision: Some(decision),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::creep::*;
    use crate::position::*;
    use crate::testing::*;

    #[test]
    fn without_flags_only_unexpected_goals_run() {
        let snapshot = creeps_snapshot(1, vec![mover(1, 5, 5)]);
        let mut actuator = RecordingActuator::new();
        let mut controller = Controller::new(TacticsSettings::default());

        let report = controller.tick(&snapshot, &mut actuator);

        assert!(controller.is_planned());
        assert_eq!(report.decision, None);
        assert_eq!(report.result, MoveResult::Success);
        assert!(actuator.commands.is_empty());
    }

    #[test]
    fn fallback_rushes_and_still_classifies() {
        let flags = vec![
            Flag {
                id: StructureId(1),
                pos: Position::new(10, 10),
                my: Some(true),
            },
            Flag {
                id: StructureId(2),
                pos: Position::new(90, 90),
                my: Some(false),
            },
        ];

        let snapshot = WorldSnapshot::new(1, vec![mover(1, 30, 30)], Vec::new(), flags, Vec::new());
        let mut actuator = RecordingActuator::new();
        let mut controller = Controller::new(TacticsSettings::default());

        let report = controller.tick(&snapshot, &mut actuator);

        assert_eq!(report.decision.map(|decision| decision.rule), Some(PostureRule::C));
        assert_eq!(actuator.commands, vec![Command::MoveTo(UnitId(1), Position::new(90, 90))]);
    }

    struct FocusRanking(UnitId);

    impl TargetRanking for FocusRanking {
        fn rank(&self, _tower: &Tower, _snapshot: &WorldSnapshot, _ledger: &HitsLedger) -> Option<TowerTarget> {
            Some(TowerTarget {
                creep: self.0,
                heal: false,
                power: 150,
            })
        }
    }

    #[test]
    fn custom_template_and_ranking_drive_the_defence() {
        let flags = vec![
            Flag {
                id: StructureId(1),
                pos: Position::new(10, 10),
                my: Some(true),
            },
            Flag {
                id: StructureId(2),
                pos: Position::new(90, 90),
                my: Some(false),
            },
        ];

        let tower = Tower {
            id: StructureId(5),
            pos: Position::new(12, 12),
            my: true,
            hits: None,
            cooldown: 0,
            energy: TOWER_CAPACITY,
            energy_capacity: TOWER_CAPACITY,
        };

        let creeps = vec![
            mover(1, 15, 14),
            Creep::new(UnitId(101), Position::new(40, 40), false, &[Part::Move, Part::Attack]),
        ];

        let snapshot = WorldSnapshot::new(1, creeps, vec![tower], flags, Vec::new());

        let template = RoleTemplate {
            offset: (-3, -3),
            roster: vec![RosterSlot::new(Part::Attack, 8, 7)],
            defence: vec![(6, 6)],
            lines: vec![vec![0]],
            doorstop: 0,
        };

        let mut actuator = RecordingActuator::new();
        let mut controller = Controller::new(TacticsSettings::default())
            .with_template(template)
            .with_ranking(Box::new(FocusRanking(UnitId(101))));

        let report = controller.tick(&snapshot, &mut actuator);

        // The single slot matches, so nobody falls back to rushing.
        assert!(controller.plan().unexpected().is_empty());
        assert_eq!(report.decision.map(|decision| decision.posture), Some(Posture::Defence));
        assert!(actuator.commands.contains(&Command::MoveTo(UnitId(1), Position::new(13, 13))));
        assert!(actuator.commands.contains(&Command::TowerAttack(StructureId(5), UnitId(101))));
    }
}
