mod all;
mod checklist;
mod filters;
mod footer;
mod log;
mod progress;

use self::log::log;
use super::*;
use checklist::checklist;
use filters::filters;
use footer::footer;
use progress::progress;

pub use all::all as render;
