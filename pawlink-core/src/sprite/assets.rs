//! Built-in creature animations
//!
//! Every frame is 16x16. The table is loaded by
//! [`SpriteStore::with_builtin`](super::SpriteStore::with_builtin); hosts
//! can replace any state afterwards with
//! [`SpriteStore::register`](super::SpriteStore::register).

use super::frame::{pack_rows, SpriteFrame};
use super::store::Frames;

/// Built-in frame edge length (pixels)
pub const FRAME_SIZE: u16 = 16;

const FRAME_BYTES: usize = SpriteFrame::packed_len(FRAME_SIZE, FRAME_SIZE);

const IDLE_0_DATA: [u8; FRAME_BYTES] = pack_rows(
    FRAME_SIZE as usize,
    &[
        "................",
        "....########....",
        "..##........##..",
        ".#............#.",
        ".#............#.",
        "#...##....##...#",
        "#...##....##...#",
        "#..............#",
        "#..............#",
        "#.....####.....#",
        "#..............#",
        ".#............#.",
        ".#............#.",
        "..##........##..",
        "...#.#....#.#...",
        "...##......##...",
    ],
);

const IDLE_1_DATA: [u8; FRAME_BYTES] = pack_rows(
    FRAME_SIZE as usize,
    &[
        "................",
        "....########....",
        "..##........##..",
        ".#............#.",
        ".#............#.",
        "#..............#",
        "#...##....##...#",
        "#..............#",
        "#..............#",
        "#.....####.....#",
        "#..............#",
        ".#............#.",
        ".#............#.",
        "..##........##..",
        "...#.#....#.#...",
        "...##......##...",
    ],
);

const HAPPY_0_DATA: [u8; FRAME_BYTES] = pack_rows(
    FRAME_SIZE as usize,
    &[
        "................",
        "....########....",
        "..##........##..",
        ".#............#.",
        ".#............#.",
        "#....#....#....#",
        "#...#.#..#.#...#",
        "#..............#",
        "#..............#",
        "#....#....#....#",
        "#.....####.....#",
        ".#............#.",
        ".#............#.",
        "..##........##..",
        "...#.#....#.#...",
        "...##......##...",
    ],
);

const HAPPY_1_DATA: [u8; FRAME_BYTES] = pack_rows(
    FRAME_SIZE as usize,
    &[
        "....########....",
        "..##........##..",
        ".#............#.",
        ".#............#.",
        "#....#....#....#",
        "#...#.#..#.#...#",
        "#..............#",
        "#..............#",
        "#....#....#....#",
        "#.....####.....#",
        ".#............#.",
        ".#............#.",
        "..##........##..",
        "...#.#....#.#...",
        "...##......##...",
        "................",
    ],
);

const HUNGRY_0_DATA: [u8; FRAME_BYTES] = pack_rows(
    FRAME_SIZE as usize,
    &[
        "................",
        "....########....",
        "..##........##..",
        ".#............#.",
        ".#............#.",
        "#...##....##...#",
        "#...##....##...#",
        "#..............#",
        "#......##......#",
        "#.....#..#.....#",
        "#.....#..#.....#",
        ".#.....##.....#.",
        ".#............#.",
        "..##........##..",
        "...#.#....#.#...",
        "...##......##...",
    ],
);

const HUNGRY_1_DATA: [u8; FRAME_BYTES] = pack_rows(
    FRAME_SIZE as usize,
    &[
        "................",
        "....########....",
        "..##........##..",
        ".#............#.",
        ".#............#.",
        "#...##....##...#",
        "#...##....##...#",
        "#..............#",
        "#..............#",
        "#......##......#",
        "#..............#",
        ".#............#.",
        ".#............#.",
        "..##........##..",
        "...#.#....#.#...",
        "...##......##...",
    ],
);

const SLEEPING_0_DATA: [u8; FRAME_BYTES] = pack_rows(
    FRAME_SIZE as usize,
    &[
        "................",
        "....########.##.",
        "..##........###.",
        ".#...........##.",
        ".#............#.",
        "#..............#",
        "#...##....##...#",
        "#..............#",
        "#..............#",
        "#......##......#",
        "#..............#",
        ".#............#.",
        ".#............#.",
        "..##........##..",
        "...#.#....#.#...",
        "...##......##...",
    ],
);

const SLEEPING_1_DATA: [u8; FRAME_BYTES] = pack_rows(
    FRAME_SIZE as usize,
    &[
        "............###.",
        "....########.#..",
        "..##........###.",
        ".#............#.",
        ".#............#.",
        "#..............#",
        "#...##....##...#",
        "#..............#",
        "#..............#",
        "#......##......#",
        "#..............#",
        ".#............#.",
        ".#............#.",
        "..##........##..",
        "...#.#....#.#...",
        "...##......##...",
    ],
);

const SAD_0_DATA: [u8; FRAME_BYTES] = pack_rows(
    FRAME_SIZE as usize,
    &[
        "................",
        "....########....",
        "..##........##..",
        ".#............#.",
        ".#............#.",
        "#...##....##...#",
        "#...##....##...#",
        "#..............#",
        "#..#...........#",
        "#..#..####.....#",
        "#....#....#....#",
        ".#............#.",
        ".#............#.",
        "..##........##..",
        "...#.#....#.#...",
        "...##......##...",
    ],
);

const fn frame(data: &'static [u8; FRAME_BYTES]) -> SpriteFrame {
    SpriteFrame::from_static(FRAME_SIZE, FRAME_SIZE, data)
}

/// Resting, blinking
pub const IDLE: &[SpriteFrame] = &[frame(&IDLE_0_DATA), frame(&IDLE_1_DATA)];

/// Smiling, bouncing
pub const HAPPY: &[SpriteFrame] = &[frame(&HAPPY_0_DATA), frame(&HAPPY_1_DATA)];

/// Mouth opening and closing
pub const HUNGRY: &[SpriteFrame] = &[frame(&HUNGRY_0_DATA), frame(&HUNGRY_1_DATA)];

/// Eyes shut, drifting Zs
pub const SLEEPING: &[SpriteFrame] = &[frame(&SLEEPING_0_DATA), frame(&SLEEPING_1_DATA)];

/// Single frame
pub const SAD: SpriteFrame = frame(&SAD_0_DATA);

/// State name to animation table
pub const BUILTIN_SPRITES: &[(&str, Frames)] = &[
    ("idle", Frames::Sequence(IDLE)),
    ("happy", Frames::Sequence(HAPPY)),
    ("hungry", Frames::Sequence(HUNGRY)),
    ("sleeping", Frames::Sequence(SLEEPING)),
    ("sad", Frames::Single(SAD)),
];
