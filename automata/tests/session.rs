// Drives the controller surface the way the UI does.

use automata::patterns::PATTERNS;
use automata::{AutomatonId, CellCoord, CellState, Heading, RunState, Session, SessionConfig};

fn session() -> Session {
    Session::new(&SessionConfig {
        side: 32,
        rule30_len: 64,
        rule90_len: 64,
        rule110_len: 48,
        ..SessionConfig::default()
    })
    .expect("valid config")
}

#[test]
fn defaults_match_the_desktop_layout() {
    let session = Session::new(&SessionConfig::default()).unwrap();
    assert_eq!(session.active_id(), AutomatonId::LangtonsAnt);
    assert_eq!(session.paintbrush(), CellState::Alive);
    assert_eq!(session.ant_position(), Some(CellCoord::new(64, 64)));
    assert_eq!(session.active().grid().borrow().len(), 128 * 128);
    assert_eq!(session.automaton(AutomatonId::Rule30).grid().borrow().len(), 512);
    assert_eq!(session.automaton(AutomatonId::Rule110).grid().borrow().len(), 256);
    assert_eq!(session.active().ant().map(|a| a.heading()), Some(Heading::East));
}

#[test]
fn paint_once_compare_rules() {
    let mut session = session();
    session.select(AutomatonId::Life);
    session.paint_cell(CellCoord::new(3, 4));

    session.select(AutomatonId::BriansBrain);
    let grid = session.active().grid().borrow();
    assert_eq!(grid.get(grid.index_of(4, 3)), CellState::Alive);
}

#[test]
fn switching_rules_keeps_generation_counts() {
    let mut session = session();
    session.select(AutomatonId::Life);
    session.toggle_pause();
    for _ in 0..3 {
        session.request_step();
        session.tick();
    }
    assert_eq!(session.generation(), 3);

    session.select(AutomatonId::Wireworld);
    assert_eq!(session.generation(), 0);
    session.select(AutomatonId::Life);
    assert_eq!(session.generation(), 3);

    session.reset_generation();
    assert_eq!(session.generation(), 0);
    assert_eq!(session.run_state(), RunState::Paused);
}

#[test]
fn clear_empties_active_grid_and_counter() {
    let mut session = session();
    session.select(AutomatonId::Rule30);
    session.paint(10);
    session.paint(11);
    session.request_step();
    session.tick();
    session.tick();
    assert!(session.generation() > 0);

    session.clear();
    assert_eq!(session.generation(), 0);
    assert!(session.active().grid().borrow().is_blank());
    // Rule 90 shares the ring
    assert!(session.automaton(AutomatonId::Rule90).grid().borrow().is_blank());
}

#[test]
fn line_painting_uses_paintbrush() {
    let mut session = session();
    session.select(AutomatonId::Wireworld);
    session.set_paintbrush(CellState::Conductor);
    session.paint_line(CellCoord::new(2, 2), CellCoord::new(9, 5));

    let grid = session.active().grid().borrow();
    assert_eq!(grid.count(CellState::Conductor), 8);
    assert_eq!(grid.get(grid.index_of(2, 2)), CellState::Conductor);
    assert_eq!(grid.get(grid.index_of(5, 9)), CellState::Conductor);
}

#[test]
fn erase_writes_empty() {
    let mut session = session();
    session.select(AutomatonId::Life);
    session.paint_cell(CellCoord::new(1, 1));
    session.erase_cell(CellCoord::new(1, 1));
    assert!(session.active().grid().borrow().is_blank());

    session.paint(40);
    assert_eq!(session.active().grid().borrow().count(CellState::Alive), 1);
    session.erase(40);
    assert!(session.active().grid().borrow().is_blank());
}

#[test]
fn ant_walks_on_the_shared_plane() {
    let mut session = session();
    session.select(AutomatonId::LangtonsAnt);
    session.tick();
    session.tick();
    assert_eq!(session.generation(), 1);
    assert_eq!(session.ant_position(), Some(CellCoord::new(16, 15)));

    session.select(AutomatonId::Life);
    assert_eq!(session.ant_position(), None);
    let grid = session.active().grid().borrow();
    assert_eq!(grid.get(grid.index_of(16, 16)), CellState::Alive);
}

#[test]
fn pattern_presets_load_centred() {
    let mut session = session();
    session.select(AutomatonId::Life);
    let glider = PATTERNS.iter().find(|p| p.name == "Glider").unwrap();
    session.load_pattern(glider);
    assert_eq!(session.active().grid().borrow().count(CellState::Alive), 5);

    session.toggle_pause();
    for _ in 0..4 {
        session.request_step();
        session.tick();
    }
    // a glider keeps its five cells
    assert_eq!(session.active().grid().borrow().count(CellState::Alive), 5);
}

#[test]
#[should_panic(expected = "outside grid")]
fn painting_off_the_grid_is_a_bug() {
    let mut session = session();
    session.select(AutomatonId::Life);
    session.paint_cell(CellCoord::new(32, 0));
}

#[test]
fn line_from_a_wider_ring_is_dropped_on_the_plane() {
    let mut session = session();
    session.select(AutomatonId::Rule30);
    let anchor = session
        .pointer_cell(700.0, 700.0, 12.0, 12.0)
        .expect("column 58 is on the 64-cell ring");
    assert_eq!(anchor, CellCoord::new(58, 58));

    session.select(AutomatonId::Life);
    session.paint_line(anchor, CellCoord::new(1, 1));
    assert!(session.active().grid().borrow().is_blank());
}

#[test]
fn clearing_the_ant_recentres_it() {
    let mut session = session();
    session.select(AutomatonId::LangtonsAnt);
    for _ in 0..20 {
        session.tick();
    }
    assert_ne!(session.ant_position(), Some(CellCoord::new(16, 16)));

    session.clear();
    assert_eq!(session.ant_position(), Some(CellCoord::new(16, 16)));
    assert_eq!(session.generation(), 0);
}
