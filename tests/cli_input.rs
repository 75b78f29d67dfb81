use std::io;

use cold_brew_calculator::app::AppError;
use cold_brew_calculator::ui_cli::{read_line_from, read_menu_choice, MenuChoice};

#[test]
fn closed_input_exits_menu() {
    let mut input = "".as_bytes();
    assert_eq!(read_menu_choice(&mut input).expect("menu"), MenuChoice::Exit);
}

#[test]
fn invalid_selections_then_eof_exit() {
    let mut input = "x\n9\n".as_bytes();
    assert_eq!(read_menu_choice(&mut input).expect("menu"), MenuChoice::Exit);
}

#[test]
fn menu_reads_selection() {
    let mut input = "bad\n2\n".as_bytes();
    assert_eq!(read_menu_choice(&mut input).expect("menu"), MenuChoice::Serve);
}

#[test]
fn read_line_reports_closed_input() {
    let mut input = "".as_bytes();
    match read_line_from(&mut input, "> ") {
        Err(AppError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("unexpected: {other:?}"),
    }
    let mut input = "150\n".as_bytes();
    assert_eq!(read_line_from(&mut input, "> ").expect("line"), "150\n");
}
