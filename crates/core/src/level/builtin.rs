//! Built-in layouts. Rows run top to bottom; see [`Level::parse`](super::Level::parse).

pub(super) const NAMES: [&str; 3] = ["small", "medium", "large"];

pub(super) fn text(name: &str) -> Option<&'static str> {
    match name {
        "small" => Some(SMALL),
        "medium" => Some(MEDIUM),
        "large" => Some(LARGE),
        _ => None,
    }
}

const SMALL: &str = "\
#############
#o...#...#.o#
#.##.#.#.#..#
#.##...#....#
#....##G##..#
#.##.#___#.##
#...........#
#.##.#####.##
#P.........o#
#############";

const MEDIUM: &str = "\
#####################
#o...#...#...#.....o#
#.##.#.#.#.#.#.#.##.#
#.##...#...#...#....#
#....#####.#####.#..#
####.#...#.#...#.#.##
#....#.#.#.....#....#
#.##.#.........#.##.#
#.........####......#
####.###..#GG#.#.####
#......#..#GG#.#....#
#.##...#..#__#.#....#
#....#.#.......#.##.#
#.##.#.#.#.#.#.#.##.#
#....#.#.#.#.#.#....#
####.#.#.#.#.#.#.#.##
#...................#
#.####....#....####.#
#P........#.........#
#o####.#.....#.####o#
#####################";

const LARGE: &str = "\
#########################
#o...#....#...#....#...o#
#.##.#.##.#.#.#.##.#.##.#
#.##........#........##.#
#....######.#.######....#
####.#....#...#....#.####
#....#.##.#.#.#.##.#....#
#.##.#.##.#.#.#.##.#.##.#
#.......................#
####....#.#___#.#....####
#.......#.#GGG#.#.......#
#.##.####.#GGG#.####.##.#
#.......#.#####.#.......#
#.##....#.......#....##.#
#.......#.......#.......#
####.#....#...#....#.####
#....#.##.#.#.#.##.#....#
#.##.#.##.#.#.#.##.#.##.#
#o...#....#...#....#...o#
#.##.#.##.#.#.#.##.#.##.#
#.........#...#.........#
#P#######.#.#.#.#######.#
#.......................#
#########################";
