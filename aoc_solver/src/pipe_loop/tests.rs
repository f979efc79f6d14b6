// testing loop tracing and containment

use super::*;

const SQUARE: &str = "\
.....
.S-7.
.|.|.
.L-J.
.....
";

const TWISTED: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

const WIDE_CHAMBERS: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

const SQUEEZED_CHAMBERS: &str = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........
";

const SCATTERED: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

const JUNK_PIPES: &str = "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
";

fn enclosed(text: &str) -> usize {
    let map: PipeMap = text.parse().unwrap();
    let pipe_loop = map.trace().unwrap();
    Containment::new(&map, &pipe_loop).count_enclosed()
}

#[test]
fn test_square_loop() {
    let map: PipeMap = SQUARE.parse().unwrap();
    assert_eq!(map.start(), Coordinate::new(1, 1));
    assert_eq!(map.start_shape(), Directions::SOUTH_EAST);
    assert_eq!(connector_symbol(map.start_shape()), 'F');

    let pipe_loop = map.trace().unwrap();
    assert_eq!(pipe_loop.steps(), 8);
    assert_eq!(pipe_loop.len(), 8);
    assert_eq!(pipe_loop.furthest_distance(), 4);
    assert!(pipe_loop.contains(Coordinate::new(3, 3)));
    assert!(!pipe_loop.contains(Coordinate::new(2, 2)));
    assert!(!pipe_loop.contains(Coordinate::new(-1, 2)));

    // the single cell in the middle is surrounded by the loop
    let containment = Containment::new(&map, &pipe_loop);
    assert_eq!(containment.enclosed_cells(), vec![Coordinate::new(2, 2)]);
    assert!(!containment.is_enclosed(Coordinate::new(0, 2)));
    assert!(!containment.is_enclosed(Coordinate::new(1, 2)));
}

#[test]
fn test_twisted_loop() {
    let map: PipeMap = TWISTED.parse().unwrap();
    assert_eq!(map.start_shape(), Directions::SOUTH_EAST);
    let pipe_loop = map.trace().unwrap();
    assert_eq!(pipe_loop.steps() % 2, 0);
    assert_eq!(pipe_loop.furthest_distance(), 8);
    assert_eq!(pipe_loop.iter().count(), pipe_loop.steps());
}

#[test]
fn test_loop_ignores_junk_pipes() {
    // junk pipes around the start cell do not connect to it
    let map: PipeMap = "-L|F7\n7S-7|\nL|7||\n-L-J|\nL|-JF\n".parse().unwrap();
    assert_eq!(map.start_shape(), Directions::SOUTH_EAST);
    let pipe_loop = map.trace().unwrap();
    assert_eq!(pipe_loop.furthest_distance(), 4);
    assert!(!pipe_loop.contains(Coordinate::new(0, 0)));
}

#[test]
fn test_enclosed_cells() {
    assert_eq!(enclosed(WIDE_CHAMBERS), 4);
    assert_eq!(enclosed(SQUEEZED_CHAMBERS), 4);
    assert_eq!(enclosed(SCATTERED), 8);
    assert_eq!(enclosed(JUNK_PIPES), 10);
}

#[test]
fn test_square_interior() {
    // 4x4 loop with a 2x2 interior
    assert_eq!(enclosed("......\n.S--7.\n.|..|.\n.|..|.\n.L--J.\n......\n"), 4);
    // start at grid edge, loop runs along the scanned rows
    assert_eq!(enclosed("S--7\n|..|\n|..|\nL--J\n"), 4);
    // horizontal start shape inside of top row
    let map: PipeMap = "F-S7\n|..|\nL7FJ\n.LJ.\n".parse().unwrap();
    assert_eq!(map.start_shape(), Directions::HORIZONTAL);
    let pipe_loop = map.trace().unwrap();
    assert_eq!(
        Containment::new(&map, &pipe_loop).enclosed_cells(),
        vec![Coordinate::new(1, 1), Coordinate::new(2, 1)]
    );
}

#[test]
fn test_crossing_convention() {
    for symbol in ['|', 'L', 'J'] {
        assert!(is_crossing(connector_from_symbol(symbol).unwrap()));
    }
    for symbol in ['-', '7', 'F', '.'] {
        assert!(!is_crossing(connector_from_symbol(symbol).unwrap()));
    }
}

#[test]
fn test_missing_start() {
    let err = ".F7.\n.LJ.\n".parse::<PipeMap>().unwrap_err();
    assert!(matches!(err, PipeLoopError::MissingStart));
}

#[test]
fn test_multiple_starts() {
    let err = "S-7\n|.|\nL-S\n".parse::<PipeMap>().unwrap_err();
    assert!(matches!(err, PipeLoopError::MultipleStarts(_, _)));
}

#[test]
fn test_invalid_start_shape() {
    let err = ".|.\n-S-\n...\n".parse::<PipeMap>().unwrap_err();
    assert!(matches!(
        err,
        PipeLoopError::InvalidStartShape { found: 3, .. }
    ));
    let err = "...\n.S-\n...\n".parse::<PipeMap>().unwrap_err();
    assert!(matches!(
        err,
        PipeLoopError::InvalidStartShape { found: 1, .. }
    ));
}

#[test]
fn test_malformed_symbols() {
    let err = "S-7\n|X|\nL-J\n".parse::<PipeMap>().unwrap_err();
    assert!(matches!(err, PipeLoopError::GridError(_)));
    let err = "S-7\n|.\nL-J\n".parse::<PipeMap>().unwrap_err();
    assert!(matches!(err, PipeLoopError::GridError(_)));
}

#[test]
fn test_broken_loop() {
    let map: PipeMap = ".....\n.S-7.\n.|.|.\n.L-..\n.....\n".parse().unwrap();
    let err = map.trace().unwrap_err();
    assert!(matches!(
        err,
        PipeLoopError::InvalidConnector { symbol: '.', .. }
    ));
}

#[test]
fn test_loop_leaving_grid() {
    let map: PipeMap = "S--\n|..\nL--\n".parse().unwrap();
    let err = map.trace().unwrap_err();
    assert!(matches!(err, PipeLoopError::LeftGrid(p) if p == Coordinate::new(3, 0)));
}
