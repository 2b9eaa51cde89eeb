mod common;

mod display;
mod routing;
