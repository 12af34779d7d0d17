mod all;
mod failure;
mod footer;
mod loading;
mod log;
mod main;
mod movie_detail;
mod movie_list;

use self::log::log;
use super::*;
use footer::footer;
use main::main;

pub use all::all as render;
