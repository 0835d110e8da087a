use super::*;

#[test]
fn fresh_flag_is_alive() {
    assert!(AliveFlag::new().is_alive());
}

#[test]
fn retirement_is_visible_across_clones() {
    let flag = AliveFlag::new();
    let task_copy = flag.clone();
    assert!(task_copy.is_alive());

    flag.retire();
    assert!(!task_copy.is_alive());
}

#[test]
fn clones_made_after_retirement_stay_retired() {
    let flag = AliveFlag::new();
    flag.retire();
    assert!(!flag.clone().is_alive());
}
