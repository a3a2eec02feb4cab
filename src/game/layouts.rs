//! Built in layouts.

use std::path::Path;

use super::Game;
use crate::error::{Error, Result};

pub const TEST_CLASSIC: &str = r#"
%%%%%
% . %
%.G.%
% . %
%. .%
%   %
%  .%
%   %
%P .%
%%%%%
"#;

pub const MINIMAX_CLASSIC: &str = r#"
%%%%%%%%%
%.P    G%
% %.%G%%%
%G    %%%
%%%%%%%%%
"#;

pub const TRAPPED_CLASSIC: &str = r#"
%%%%%%%%
%   P G%
%G%%%%%%
%....  %
%%%%%%%%
"#;

pub const SMALL_CLASSIC: &str = r#"
%%%%%%%%%%%%%%%%%%%%
%......%G  G%......%
%.%%...%%  %%...%%.%
%.%o.%........%.o%.%
%.%%.%.%%%%%%.%.%%.%
%........P.........%
%%%%%%%%%%%%%%%%%%%%
"#;

/// One row: a ghost, pacman and a single food.
pub const CORRIDOR: &str = "GP.";

pub const NAMES: [&str; 5] = [
    "testClassic",
    "minimaxClassic",
    "trappedClassic",
    "smallClassic",
    "corridor",
];

pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "testClassic" => Some(TEST_CLASSIC),
        "minimaxClassic" => Some(MINIMAX_CLASSIC),
        "trappedClassic" => Some(TRAPPED_CLASSIC),
        "smallClassic" => Some(SMALL_CLASSIC),
        "corridor" => Some(CORRIDOR),
        _ => None,
    }
}

/// Loads a built in layout by name or a layout file.
pub fn load(name: &str) -> Result<Game> {
    if let Some(txt) = builtin(name) {
        return Game::parse(txt);
    }

    let path = Path::new(name);
    if path.is_file() {
        Game::parse(&std::fs::read_to_string(path)?)
    } else {
        Err(Error::UnknownLayout(name.into()))
    }
}
