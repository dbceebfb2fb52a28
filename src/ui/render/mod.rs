mod all;
mod display;
mod footer;
mod keypad;
mod log;

use self::log::log;
use super::*;
use display::display;
use footer::footer;
use keypad::keypad;

pub use all::all as render;
