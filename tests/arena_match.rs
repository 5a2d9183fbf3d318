use screeps_arena_ctf::arena::scenario::*;
use screeps_arena_ctf::arena::*;
use screeps_arena_ctf::creep::*;
use screeps_arena_ctf::game_loop::*;
use screeps_arena_ctf::pathing::movement::*;
use screeps_arena_ctf::position::*;
use screeps_arena_ctf::posture::selector::*;
use screeps_arena_ctf::settings::*;

fn flags(my: Position, enemy: Position) -> Vec<Flag> {
    vec![
        Flag {
            id: StructureId(500),
            pos: my,
            my: Some(true),
        },
        Flag {
            id: StructureId(501),
            pos: enemy,
            my: Some(false),
        },
    ]
}

#[test]
fn default_match_defends_then_prepares() {
    let scenario = Scenario::capture_the_flag();
    let mut arena = Arena::new(&scenario);
    let mut controller = Controller::new(TacticsSettings::default());

    let first = arena.run_tick(&mut controller);

    assert!(controller.plan().unexpected().is_empty());
    assert_eq!(first.decision.map(|decision| decision.posture), Some(Posture::Defence));
    assert_eq!(first.decision.map(|decision| decision.rule), Some(PostureRule::G));

    let mut last = first;
    while arena.tick() <= 45 {
        last = arena.run_tick(&mut controller);

        assert_ne!(last.result, MoveResult::InvalidConfiguration);
    }

    assert_eq!(last.tick, 45);
    assert_eq!(last.decision.map(|decision| decision.rule), Some(PostureRule::F));
    assert_eq!(last.decision.map(|decision| decision.posture), Some(Posture::Prepare));

    let snapshot = arena.snapshot();
    let moved = scenario
        .creeps
        .iter()
        .filter(|creep| creep.my)
        .filter(|creep| snapshot.creep(creep.id).map(|now| now.pos != creep.pos).unwrap_or(false))
        .count();

    assert!(moved > 0);
    assert_eq!(arena.captured(), None);
}

#[test]
fn displaced_roster_rushes_the_enemy_flag() {
    let mut scenario = Scenario::capture_the_flag();
    for creep in scenario.creeps.iter_mut().filter(|creep| creep.my) {
        creep.pos = creep.pos.offset(0, 20);
    }

    let mut arena = Arena::new(&scenario);
    let mut controller = Controller::new(TacticsSettings::default());

    let start = arena.snapshot();
    let report = arena.run_tick(&mut controller);
    let after = arena.snapshot();

    assert_eq!(controller.plan().unexpected().len(), 14);
    assert_ne!(report.result, MoveResult::InvalidConfiguration);

    let enemy_flag = Position::new(89, 89);
    let closer = start
        .creeps()
        .iter()
        .filter(|creep| creep.my)
        .filter(|creep| {
            after
                .creep(creep.id)
                .map(|now| now.pos.get_range_to(enemy_flag) < creep.pos.get_range_to(enemy_flag))
                .unwrap_or(false)
        })
        .count();

    assert!(closer > 0);
}

#[test]
fn lone_raider_captures_the_flag() {
    let scenario = Scenario {
        width: 20,
        height: 20,
        creeps: vec![Creep::new(UnitId(1), Position::new(10, 10), true, &[Part::Move])],
        flags: flags(Position::new(2, 2), Position::new(13, 10)),
        ..Scenario::default()
    };

    let mut arena = Arena::new(&scenario);
    let settings = TacticsSettings {
        map_side_size: 20,
        ..TacticsSettings::default()
    };
    let mut controller = Controller::new(settings);

    for _ in 0..3 {
        arena.run_tick(&mut controller);
    }

    assert_eq!(arena.captured(), Some(true));
}
