// SPDX-License-Identifier: FSL-1.1
use lifo::prelude::*;

// Smoke-test walkthrough of both stack variants.
fn main() {
    let mut stack = ArrayStack::new();
    stack.push(4);
    stack.push(13);
    stack.push(8);
    stack.push(11);
    stack.push(25);
    println!("{stack:?}");
    println!("{:?}", stack.peek());
    println!("{}", stack.size());
    println!("{:?}", stack.pop());
    println!("{stack:?}");

    let mut link_stack = LinkedStack::new();
    link_stack
        .push(4)
        .push(33)
        .push(17)
        .push(42)
        .push(72)
        .push(6)
        .push(13);
    println!("{link_stack:?}");
    println!("{}", link_stack.size());
    println!("{:?}", link_stack.pop());
    println!("{:?}", link_stack.peek());
}
