use super::*;
use board::task::Task;
use board::view::NoticeKind;

fn note(id: i64, content: &str) -> Note {
    Note::new(Task { id: TaskId(id), content: content.to_owned(), is_completed: false, deadline: None, position: None })
}

#[test]
fn default_state_is_not_loaded() {
    let state = BoardState::default();
    assert!(!state.loaded);
    assert!(!state.is_empty_board());
    assert_eq!(state.sort_mode, SortMode::Manual);
}

#[test]
fn apply_render_replaces_notes_and_mode() {
    let mut state = BoardState::default();
    state.apply_render(&[note(1, "a"), note(2, "b")], SortMode::Manual);
    state.apply_render(&[note(2, "b")], SortMode::Deadline);
    assert_eq!(state.notes.len(), 1);
    assert_eq!(state.sort_mode, SortMode::Deadline);
    assert!(state.note(TaskId(1)).is_none());
    assert_eq!(state.note(TaskId(2)).map(|n| n.task.content.as_str()), Some("b"));
}

#[test]
fn empty_board_only_after_a_render() {
    let mut state = BoardState::default();
    state.apply_render(&[], SortMode::Manual);
    assert!(state.is_empty_board());
}

#[test]
fn push_notice_drops_oldest_beyond_cap() {
    let mut state = BoardState::default();
    for i in 0..4 {
        state.push_notice(Notice::validation(format!("n{i}")), 3);
    }
    let messages: Vec<&str> = state.notices.iter().map(|s| s.notice.message.as_str()).collect();
    assert_eq!(messages, ["n1", "n2", "n3"]);
}

#[test]
fn push_notice_keeps_at_least_one() {
    let mut state = BoardState::default();
    state.push_notice(Notice::validation("a"), 0);
    state.push_notice(Notice::validation("b"), 0);
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].notice.message, "b");
}

#[test]
fn dismiss_notice_removes_only_that_one() {
    let mut state = BoardState::default();
    state.push_notice(Notice::new(NoticeKind::NetworkFailure, "down"), 5);
    state.push_notice(Notice::new(NoticeKind::NotFound, "gone"), 5);
    let first = state.notices[0].id;
    assert!(state.dismiss_notice(first));
    assert!(!state.dismiss_notice(first));
    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].notice.kind, NoticeKind::NotFound);
}

#[test]
fn signal_view_writes_renders_and_notices() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(BoardState::default());
        let view = SignalBoardView::new(state, 2);
        view.render(&[note(7, "x")], SortMode::Deadline);
        view.notify(Notice::validation("one"));
        view.notify(Notice::validation("two"));
        view.notify(Notice::validation("three"));
        state.with_untracked(|s| {
            assert_eq!(s.notes.len(), 1);
            assert_eq!(s.sort_mode, SortMode::Deadline);
            assert_eq!(s.notices.len(), 2);
            assert_eq!(s.notices[1].notice.message, "three");
        });
    });
}
