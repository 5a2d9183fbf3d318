use super::builder::*;
use super::filter::*;
use super::template::*;
use crate::creep::*;
use crate::goals::*;
use crate::position::*;
use crate::posture::selector::*;
use crate::settings::*;
use crate::snapshot::*;
use log::*;
use std::collections::HashMap;

/// Goal lists for every posture, built once at the start of the match.
#[derive(Clone, Debug, Default)]
pub struct Plan {
    my_flag: Option<Position>,
    enemy_flag: Option<Position>,
    unexpected: GoalList,
    postures: HashMap<Posture, GoalList>,
}

fn list(postures: &mut HashMap<Posture, GoalList>, posture: Posture) -> &mut GoalList {
    postures.entry(posture).or_default()
}

impl Plan {
    pub fn build(snapshot: &WorldSnapshot, me: &PlayerInfo, template: &RoleTemplate, settings: &TacticsSettings) -> Plan {
        let mut plan = Plan {
            my_flag: snapshot.my_flag().map(|flag| flag.pos),
            enemy_flag: snapshot.enemy_flag().map(|flag| flag.pos),
            ..Plan::default()
        };

        match plan.organise(snapshot, me, template, settings) {
            Ok((postures, unexpected)) => {
                plan.postures = postures;

                if !unexpected.is_empty() {
                    warn!("Unexpected creeps detected: {:?}", unexpected);
                    plan.add_unexpected(&unexpected);
                }

                info!("Planning complete at tick {}", snapshot.tick());
            }
            Err(err) => {
                error!("Planning failed, rushing with every creep: {}", err);
                plan.add_unexpected(&me.creeps);
            }
        }

        plan
    }

    fn add_unexpected(&mut self, creeps: &[UnitId]) {
        if let Some(enemy_flag) = self.enemy_flag {
            for creep in creeps.iter() {
                self.unexpected.push(CreepPositionGoal::new(*creep, enemy_flag).into());
            }
        }
    }

    fn organise(
        &self,
        snapshot: &WorldSnapshot,
        me: &PlayerInfo,
        template: &RoleTemplate,
        settings: &TacticsSettings,
    ) -> Result<(HashMap<Posture, GoalList>, Vec<UnitId>), String> {
        let my_flag = self.my_flag.ok_or("own flag not found")?;
        let enemy_flag = self.enemy_flag.ok_or("enemy flag not found")?;

        template.validate()?;

        let (offset_x, offset_y) = template.offset;

        let filter = template
            .roster
            .iter()
            .fold(CreepFilterBuilder::around(my_flag).offset(offset_x, offset_y), |builder, slot| {
                builder.with_part_at(slot.part, slot.x, slot.y)
            })
            .auto_rotate(settings.map_side_size)
            .build();

        let creeps = me.creeps.iter().filter_map(|id| snapshot.creep(*id));
        let (expected, unexpected) = filter.filter(creeps).ok_or("creeps are not on expected positions")?;

        let defence_goals = PositionGoalBuilder::around(my_flag)
            .offset(offset_x, offset_y)
            .with_creeps(&expected)
            .with_positions(&template.defence)
            .auto_rotate(settings.map_side_size)
            .build()?;

        let mut postures: HashMap<Posture, GoalList> = Posture::ALL.iter().map(|posture| (*posture, GoalList::new())).collect();

        let mut power_up = BodyPartGoal::new();

        for defence_goal in defence_goals.iter() {
            let rush_goal = CreepPositionGoal::new(defence_goal.creep, enemy_flag);

            list(&mut postures, Posture::Defence).push(defence_goal.clone().into());
            list(&mut postures, Posture::RushRandom).push(rush_goal.clone().into());
            list(&mut postures, Posture::DefenceOrRushRandom).push(OrGoal::new(vec![defence_goal.clone().into(), rush_goal.into()]).into());

            power_up.add_creep(defence_goal.creep);
        }

        list(&mut postures, Posture::PowerUp).push(power_up.into());

        let mut prepare = BodyPartGoal::new();

        for line in template.lines.iter() {
            let members: Vec<&CreepPositionGoal> = line.iter().map(|index| &defence_goals[*index]).collect();

            let defend = AndGoal::valid_only(members.iter().map(|goal| (*goal).clone().into()).collect()).fail_fast(settings.and_fail_fast);
            let creep_line = CreepLine::new(members.iter().map(|goal| goal.creep).collect());
            let offence = LinePositionGoal::new(creep_line.clone(), enemy_flag);

            list(&mut postures, Posture::RushOrganised).push(offence.clone().into());
            list(&mut postures, Posture::DefenceOrRushOrganised).push(OrGoal::new(vec![defend.into(), offence.into()]).into());

            prepare.add_creep_line(creep_line);
        }

        list(&mut postures, Posture::Prepare).push(prepare.into());

        let doorstop = &defence_goals[template.doorstop];

        for posture in [Posture::RushOrganised, Posture::DefenceOrRushOrganised, Posture::Prepare] {
            list(&mut postures, posture).push(doorstop.clone().into());
        }

        for tower in me.towers.iter() {
            for posture in Posture::ALL.iter() {
                let goal = match posture {
                    Posture::Defence | Posture::DefenceOrRushRandom | Posture::DefenceOrRushOrganised => TowerGoal::defend(*tower),
                    _ => TowerGoal::standby(*tower),
                };

                list(&mut postures, *posture).push(goal.into());
            }
        }

        Ok((postures, unexpected))
    }

    pub fn my_flag(&self) -> Option<Position> {
        self.my_flag
    }

    pub fn enemy_flag(&self) -> Option<Position> {
        self.enemy_flag
    }

    pub fn unexpected(&self) -> &GoalList {
        &self.unexpected
    }

    pub fn unexpected_mut(&mut self) -> &mut GoalList {
        &mut self.unexpected
    }

    pub fn goals(&self, posture: Posture) -> Option<&GoalList> {
        self.postures.get(&posture)
    }

    pub fn goals_for(&mut self, posture: Posture) -> &mut GoalList {
        list(&mut self.postures, posture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(id: u32, x: i32, y: i32, my: bool) -> Flag {
        Flag {
            id: StructureId(id),
            pos: Position::new(x, y),
            my: Some(my),
        }
    }

    fn roster(template: &RoleTemplate) -> Vec<Creep> {
        template
            .roster
            .iter()
            .enumerate()
            .map(|(index, slot)| Creep::new(UnitId(index as u32 + 1), Position::new(7 + slot.x, 7 + slot.y), true, &[Part::Move, slot.part]))
            .collect()
    }

    fn plan_for(creeps: Vec<Creep>, flags: Vec<Flag>) -> Plan {
        let tower = Tower {
            id: StructureId(900),
            pos: Position::new(12, 12),
            my: true,
            hits: None,
            cooldown: 0,
            energy: 50,
            energy_capacity: 50,
        };

        let snapshot = WorldSnapshot::new(1, creeps, vec![tower], flags, Vec::new());
        let me = PlayerInfo::collect(&snapshot, true);

        Plan::build(&snapshot, &me, &RoleTemplate::default(), &TacticsSettings::default())
    }

    #[test]
    fn roster_in_place_fills_every_posture() {
        let template = RoleTemplate::default();
        let plan = plan_for(roster(&template), vec![flag(1, 10, 10, true), flag(2, 90, 90, false)]);

        assert!(plan.unexpected().is_empty());

        let count = |posture| plan.goals(posture).map(|goals| goals.len()).unwrap_or(0);

        assert_eq!(count(Posture::Defence), 15);
        assert_eq!(count(Posture::RushRandom), 15);
        assert_eq!(count(Posture::DefenceOrRushRandom), 15);
        assert_eq!(count(Posture::PowerUp), 2);
        assert_eq!(count(Posture::RushOrganised), 7);
        assert_eq!(count(Posture::DefenceOrRushOrganised), 7);
        assert_eq!(count(Posture::Prepare), 3);

        let defence = plan.goals(Posture::Defence).unwrap();
        assert_eq!(defence[0], Goal::CreepPosition(CreepPositionGoal::new(UnitId(1), Position::new(13, 10))));
        assert_eq!(defence[14], Goal::Tower(TowerGoal::defend(StructureId(900))));
    }

    #[test]
    fn extra_creeps_rush_the_enemy_flag() {
        let template = RoleTemplate::default();
        let mut creeps = roster(&template);
        creeps.push(Creep::new(UnitId(99), Position::new(40, 40), true, &[Part::Move]));

        let plan = plan_for(creeps, vec![flag(1, 10, 10, true), flag(2, 90, 90, false)]);

        assert_eq!(plan.unexpected().0, vec![Goal::CreepPosition(CreepPositionGoal::new(UnitId(99), Position::new(90, 90)))]);
        assert_eq!(plan.goals(Posture::Defence).map(|goals| goals.len()), Some(15));
    }

    #[test]
    fn displaced_roster_falls_back_to_rushing() {
        let template = RoleTemplate::default();
        let mut creeps = roster(&template);
        creeps[3].pos = Position::new(50, 50);

        let plan = plan_for(creeps, vec![flag(1, 10, 10, true), flag(2, 90, 90, false)]);

        assert_eq!(plan.unexpected().len(), 14);
        assert!(plan.goals(Posture::Defence).is_none());
    }

    #[test]
    fn missing_enemy_flag_leaves_nothing_to_do() {
        let template = RoleTemplate::default();
        let plan = plan_for(roster(&template), vec![flag(1, 10, 10, true)]);

        assert!(plan.unexpected().is_empty());
        assert_eq!(plan.enemy_flag(), None);
        assert_eq!(plan.my_flag(), Some(Position::new(10, 10)));
    }
}
