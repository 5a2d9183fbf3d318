use screeps_arena_ctf::posture::selector::*;
use screeps_arena_ctf::posture::statistics::*;
use screeps_arena_ctf::settings::*;

fn inputs(settings: &TacticsSettings, tick: u32, offence: Vec<u32>, defence: Vec<u32>) -> PostureInputs {
    let remaining = settings.ticks_remaining(tick);

    PostureInputs {
        tick,
        flag_distance: 80,
        enemy_offence: PositionStatistics::new(offence, remaining),
        enemy_defence: PositionStatistics::new(defence, remaining),
    }
}

#[test]
fn unreachable_enemy_near_deadline_rushes_at_random() {
    let settings = TacticsSettings::default();
    let mut selector = PostureSelector::new();

    let decision = selector.select(&settings, &inputs(&settings, 1960, vec![90, 95], vec![40]));

    assert_eq!(decision.rule, PostureRule::A);
    assert_eq!(decision.posture, Posture::RushRandom);
}

#[test]
fn attack_condition_latches_on_its_first_tick() {
    let settings = TacticsSettings::default();
    let mut selector = PostureSelector::new();

    let first = selector.select(&settings, &inputs(&settings, 500, vec![50, 50, 50], vec![30]));
    assert_eq!(first.rule, PostureRule::I);
    assert!(selector.enemy_attacked());

    let next = selector.select(&settings, &inputs(&settings, 501, vec![70, 70, 70], vec![30]));
    assert_eq!(next.rule, PostureRule::I);
}

#[test]
fn attack_latch_never_releases() {
    let settings = TacticsSettings::default();
    let mut selector = PostureSelector::new();

    selector.select(&settings, &inputs(&settings, 300, vec![10, 20, 30], vec![50]));
    assert!(selector.enemy_attacked());

    for (tick, offence) in [(301, vec![70, 75]), (400, vec![79, 80, 80]), (900, vec![60]), (1200, vec![75, 78])] {
        let decision = selector.select(&settings, &inputs(&settings, tick, offence, vec![50]));

        assert!(selector.enemy_attacked());
        assert_eq!(decision.posture, Posture::DefenceOrRushOrganised);
    }
}
