use screeps_arena_ctf::goals::assignment::*;
use screeps_arena_ctf::position::*;

fn actor(x: i32, y: i32, delay: u32) -> AssignmentActor {
    AssignmentActor {
        pos: Position::new(x, y),
        delay,
    }
}

fn target(x: i32, y: i32, lifetime: u32) -> AssignmentTarget {
    AssignmentTarget {
        pos: Position::new(x, y),
        lifetime,
    }
}

#[test]
fn short_lived_target_gets_nobody() {
    let actors = [actor(15, 10, 0), actor(5, 10, 0), actor(10, 15, 0), actor(10, 5, 0)];
    let targets = [target(10, 10, 2)];

    assert!(allocate(&actors, &targets, 10).is_empty());
}

#[test]
fn assignments_always_arrive_before_decay() {
    let margin = 10;

    let actors: Vec<AssignmentActor> = (0..9).map(|i| actor((i * 37) % 100, (i * 53) % 100, (i % 4) as u32 * 3)).collect();
    let targets: Vec<AssignmentTarget> = (0..4).map(|i| target((i * 29 + 11) % 100, (i * 71 + 5) % 100, 30 + i as u32 * 25)).collect();

    let assignments = allocate(&actors, &targets, margin);

    assert!(!assignments.is_empty());

    for assignment in assignments.iter() {
        let actor = &actors[assignment.actor];
        let target = &targets[assignment.target];
        let arrival = actor.pos.get_range_to(target.pos) + actor.delay;

        assert!(arrival as i64 <= target.lifetime as i64 - margin as i64);
    }

    let mut seen: Vec<usize> = assignments.iter().map(|assignment| assignment.actor).collect();
    seen.dedup();
    assert_eq!(seen.len(), assignments.len());
}
