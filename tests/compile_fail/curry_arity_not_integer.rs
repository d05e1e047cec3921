#![allow(dead_code)]

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn main() {
    let _ = rightward::curry!(add, "two");
}
