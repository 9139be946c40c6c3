//! Integration tests for heading rotation.

use std::convert::TryFrom;

use agent_math::heading::{
    turn_heading, turn_heading_in, turn_left, turn_right, Heading, ORIENTATIONS,
};
use agent_math::{HeadingError, LEFT, RIGHT};

#[test]
fn east_turns_left_to_north_and_right_to_south() {
    assert_eq!(turn_left(Heading::East), Heading::North);
    assert_eq!(turn_left(Heading::East).vector(), (0, 1));
    assert_eq!(turn_right(Heading::East), Heading::South);
    assert_eq!(turn_right(Heading::East).vector(), (0, -1));
}

#[test]
fn four_turns_return_to_start() {
    for &h in ORIENTATIONS.iter() {
        let mut left = h;
        let mut right = h;
        for _ in 0..4 {
            left = turn_left(left);
            right = turn_right(right);
        }
        assert_eq!(left, h);
        assert_eq!(right, h);
    }
}

#[test]
fn left_undoes_right() {
    for &h in ORIENTATIONS.iter() {
        assert_eq!(turn_left(turn_right(h)), h);
        assert_eq!(turn_right(turn_left(h)), h);
        assert_eq!(h.left().right(), h);
    }
}

#[test]
fn turn_heading_matches_named_turns() {
    for &h in ORIENTATIONS.iter() {
        assert_eq!(turn_heading(h, LEFT), turn_left(h));
        assert_eq!(turn_heading(h, RIGHT), turn_right(h));
        assert_eq!(turn_heading(h, 0), h);
        assert_eq!(turn_heading(h, 2), turn_heading(h, -2));
    }
}

#[test]
fn try_from_vector() {
    assert_eq!(Heading::try_from((-1, 0)), Ok(Heading::West));
    assert_eq!(
        Heading::try_from((1, 1)),
        Err(HeadingError::NotCanonical(1, 1))
    );
    for &h in ORIENTATIONS.iter() {
        let v: (i32, i32) = h.into();
        assert_eq!(Heading::try_from(v), Ok(h));
    }
}

#[test]
fn turn_heading_in_raw_vectors() {
    let headings = [(1, 0), (0, 1), (-1, 0), (0, -1)];
    assert_eq!(turn_heading_in(&headings, (1, 0), LEFT), Ok((0, 1)));
    assert_eq!(turn_heading_in(&headings, (1, 0), RIGHT), Ok((0, -1)));
    assert_eq!(turn_heading_in(&headings, (0, -1), LEFT), Ok((1, 0)));
}

#[test]
fn turn_heading_in_unknown_or_empty() {
    let headings = [(1, 0), (0, 1), (-1, 0), (0, -1)];
    assert_eq!(
        turn_heading_in(&headings, (2, 0), LEFT),
        Err(HeadingError::UnknownHeading)
    );
    let empty: [(i32, i32); 0] = [];
    assert_eq!(
        turn_heading_in(&empty, (1, 0), LEFT),
        Err(HeadingError::EmptyHeadings)
    );
}

#[test]
fn advance_steps_along_heading() {
    assert_eq!(Heading::East.advance((2, 3)), (3, 3));
    assert_eq!(Heading::South.advance((2, 3)), (2, 2));
    let mut pos = (0, 0);
    let mut h = Heading::East;
    for _ in 0..4 {
        pos = h.advance(pos);
        h = h.left();
    }
    assert_eq!(pos, (0, 0));
    assert_eq!(h, Heading::East);
}

#[test]
fn heading_display_and_serde() {
    assert_eq!(Heading::North.to_string(), "North");
    let json = serde_json::to_string(&Heading::West).unwrap();
    assert_eq!(json, "\"West\"");
    let back: Heading = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Heading::West);
}
