use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map, map_res},
    sequence::{delimited, preceded, separated_pair, tuple},
    IResult,
};

use crate::{
    error::{Error, Result},
    geometry::{Brick, Coord},
};

fn number(input: &str) -> IResult<&str, i32> {
    map_res(digit1, str::parse)(input)
}

fn coord(input: &str) -> IResult<&str, Coord> {
    map(
        tuple((
            number,
            preceded(char(','), number),
            preceded(char(','), number),
        )),
        |(x, y, z)| Coord { x, y, z },
    )(input)
}

fn brick(input: &str) -> IResult<&str, Brick> {
    map(separated_pair(coord, char('~'), coord), |(start, end)| {
        Brick::new(start, end)
    })(input)
}

/// Parses one `x1,y1,z1~x2,y2,z2` brick per line. Blank lines are skipped.
pub fn parse_bricks(input: &str) -> Result<Vec<Brick>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            all_consuming(delimited(space0, brick, space0))(line)
                .map(|(_, brick)| brick)
                .map_err(|_| Error::MalformedInput {
                    line: i + 1,
                    content: line.to_string(),
                })
        })
        .collect()
}
