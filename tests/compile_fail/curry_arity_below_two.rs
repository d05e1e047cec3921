#![allow(dead_code)]

fn negate(a: i32) -> i32 {
    -a
}

fn main() {
    let _ = rightward::curry!(negate, 1);
}
