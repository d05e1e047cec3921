#![allow(dead_code)]

#[rightward::do_notation]
fn plain(value: Maybe<i32>) -> Maybe<i32> {
    value
}

fn main() {}
