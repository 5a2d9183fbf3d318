use screeps_arena_ctf::arena::intents::*;
use screeps_arena_ctf::arena::map::*;
use screeps_arena_ctf::creep::*;
use screeps_arena_ctf::goals::*;
use screeps_arena_ctf::military::ranking::*;
use screeps_arena_ctf::pathing::movement::*;
use screeps_arena_ctf::position::*;
use screeps_arena_ctf::settings::*;
use screeps_arena_ctf::snapshot::*;

fn walker(id: u32, x: i32, y: i32) -> Creep {
    Creep::new(UnitId(id), Position::new(x, y), true, &[Part::Move, Part::Attack])
}

fn world(creeps: Vec<Creep>) -> WorldSnapshot {
    WorldSnapshot::new(10, creeps, Vec::new(), Vec::new(), Vec::new())
}

fn line(ids: &[u32]) -> CreepLine {
    CreepLine::new(ids.iter().map(|id| UnitId(*id)).collect())
}

fn to(creep: u32, x: i32, y: i32) -> Goal {
    CreepPositionGoal::new(UnitId(creep), Position::new(x, y)).into()
}

/// Advances a goal once against the arena's intent buffer.
fn advance(goal: &mut Goal, snapshot: &WorldSnapshot) -> (MoveResult, Intents) {
    let map = ArenaMap::new(100, 100);
    let settings = TacticsSettings::default();
    let ranking = ValueRanking::default();
    let mut buffer = IntentBuffer::new(&map, snapshot);

    let result = {
        let mut ctx = TickContext::new(snapshot, &mut buffer, &ranking, &settings);
        goal.advance(&mut ctx, MoveOptions::empty())
    };

    (result, buffer.into_intents())
}

fn selection(or: &OrGoal, snapshot: &WorldSnapshot) -> Option<usize> {
    let map = ArenaMap::new(100, 100);
    let settings = TacticsSettings::default();
    let ranking = ValueRanking::default();
    let mut buffer = IntentBuffer::new(&map, snapshot);
    let ctx = TickContext::new(snapshot, &mut buffer, &ranking, &settings);

    or.select(&ctx, MoveOptions::empty())
}

#[test]
fn adjacent_convoy_steps_behind_its_head() {
    let snapshot = world(vec![walker(1, 10, 10), walker(2, 11, 10), walker(3, 12, 10)]);
    let mut goal: Goal = LinePositionGoal::new(line(&[1, 2, 3]), Position::new(0, 10)).into();

    let (result, intents) = advance(&mut goal, &snapshot);

    assert_eq!(result, MoveResult::Success);
    assert_eq!(intents.moves.len(), 3);
    assert_eq!(intents.moves[0], (UnitId(3), Position::new(11, 10)));
    assert_eq!(intents.moves[1], (UnitId(2), Position::new(10, 10)));
    assert_eq!(intents.moves[2].0, UnitId(1));
    assert_eq!(intents.moves[2].1.x, 9);
}

#[test]
fn spread_convoy_waits_for_its_tail() {
    let snapshot = world(vec![walker(1, 10, 10), walker(2, 15, 10)]);
    let mut goal: Goal = LinePositionGoal::new(line(&[1, 2]), Position::new(0, 10)).into();

    let (result, intents) = advance(&mut goal, &snapshot);

    assert_eq!(result, MoveResult::MustWait);
    assert_eq!(intents.moves.len(), 1);
    assert_eq!(intents.moves[0].0, UnitId(2));
    assert_eq!(intents.moves[0].1.x, 14);
}

#[test]
fn or_delegates_to_the_cheaper_goal() {
    let snapshot = world(vec![walker(1, 0, 0), walker(2, 50, 50)]);
    let mut goal: Goal = OrGoal::new(vec![to(1, 10, 0), to(2, 53, 50)]).into();

    let (result, intents) = advance(&mut goal, &snapshot);

    assert_eq!(result, MoveResult::Success);
    assert_eq!(intents.moves.len(), 1);
    assert_eq!(intents.moves[0].0, UnitId(2));
    assert_eq!(intents.moves[0].1.x, 51);
}

#[test]
fn or_selection_ignores_growth_of_losers() {
    let snapshot = world(vec![walker(1, 0, 0), walker(2, 50, 50), walker(3, 20, 20)]);

    for extra in [0, 1, 5, 20, 40] {
        let or = OrGoal::new(vec![to(1, 10 + extra, 0), to(2, 54, 50), to(3, 26 + extra, 20)]);

        assert_eq!(selection(&or, &snapshot), Some(1));
    }

    let tied = OrGoal::new(vec![to(1, 4, 0), to(2, 54, 50)]);
    assert_eq!(selection(&tied, &snapshot), Some(0));
}

#[test]
fn and_valid_only_reports_its_single_live_goal() {
    let mut tired = walker(2, 30, 30);
    tired.fatigue = 4;
    let snapshot = world(vec![tired]);

    let mut all_dead: Goal = AndGoal::valid_only(vec![to(7, 1, 1), to(8, 2, 2)]).into();
    assert_eq!(advance(&mut all_dead, &snapshot).0, MoveResult::NoCapableActor);

    let mut one_live: Goal = AndGoal::valid_only(vec![to(7, 1, 1), to(2, 40, 40)]).into();
    assert_eq!(advance(&mut one_live, &snapshot).0, MoveResult::MustWait);
}

#[test]
fn convoy_refresh_is_idempotent_and_never_regrows() {
    let mut dead = walker(2, 11, 10);
    dead.hits = 0;

    let mut convoy = line(&[1, 2, 3, 4]);

    let casualties = world(vec![walker(1, 10, 10), dead, walker(3, 12, 10)]);
    convoy.refresh(&casualties);
    let once = convoy.creeps().to_vec();
    convoy.refresh(&casualties);

    assert_eq!(convoy.creeps(), once.as_slice());
    assert_eq!(once, vec![UnitId(1), UnitId(3)]);

    let everyone_back = world(vec![walker(1, 10, 10), walker(2, 11, 10), walker(3, 12, 10), walker(4, 13, 10)]);
    convoy.refresh(&everyone_back);

    assert_eq!(convoy.creeps(), once.as_slice());
}
