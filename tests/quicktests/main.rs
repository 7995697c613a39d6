extern crate quickcheck;
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod graph;
mod red_black;
