// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! ymd {
    // Calendar date shorthand for fixtures and constants.
    // Panics on an impossible date, so keep it to literals.
    ($y:expr, $m:expr, $d:expr) => {
        ::chrono::NaiveDate::from_ymd_opt($y, $m, $d).expect("valid calendar date")
    };
}
