#[macro_use]
mod util;

mod number;
mod layout;
mod hit_test;
mod session;
