#![allow(dead_code)]

struct Till;

#[rightward::do_for(total, discount)]
impl Till {
    fn total(&self, scope: Scope) -> Outcome<u32, String> {
        Outcome::success(0)
    }
}

fn main() {}
