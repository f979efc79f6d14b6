// pipe maze: farthest point of the loop and cells enclosed by it

use super::{Answer, PuzzleResult};
use crate::{
    configuration::PuzzleSettings,
    pipe_loop::{connector_symbol, Containment, PipeMap},
};

pub fn solve(input: &str, settings: &PuzzleSettings) -> PuzzleResult<Answer> {
    let map: PipeMap = input.parse()?;
    let pipe_loop = map.trace()?;
    if settings.verbose {
        println!(
            "Start {} is pipe '{}', loop has {} steps.",
            map.start(),
            connector_symbol(map.start_shape()),
            pipe_loop.steps()
        );
    }
    let enclosed = Containment::new(&map, &pipe_loop).count_enclosed();
    Ok(Answer::new(
        pipe_loop.furthest_distance() as i64,
        enclosed as i64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pipe_loop::PipeLoopError, puzzles::PuzzleError};

    #[test]
    fn test_example() {
        let input = "7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ\n";
        let answer = solve(input, &PuzzleSettings::default()).unwrap();
        assert_eq!(answer, Answer::new(8, 1));
    }

    #[test]
    fn test_missing_start() {
        let err = solve("F7\nLJ\n", &PuzzleSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::PipeLoopError(PipeLoopError::MissingStart)
        ));
    }
}
