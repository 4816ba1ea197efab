use lifo::{ArrayStack, LinkedStack, Sentinel};

#[test_log::test]
fn test_empty_array_stack_sentinels() {
    let mut stack: ArrayStack<u32> = ArrayStack::new();
    // pop reports "no value", peek reports "empty"
    assert_eq!(Err(Sentinel::NoValue), stack.pop());
    assert_eq!(Err(Sentinel::Empty), stack.peek());
    assert!(stack.is_empty());
    assert_eq!(0, stack.size());
}

#[test_log::test]
fn test_empty_linked_stack_sentinels() {
    let mut stack: LinkedStack<u32> = LinkedStack::new();
    assert_eq!(Err(Sentinel::NoValue), stack.pop());
    assert_eq!(Err(Sentinel::Empty), stack.peek());
    assert!(stack.is_empty());
    assert_eq!(0, stack.size());
    assert!(stack.check().is_ok());
}

#[test_log::test]
fn test_empty_operations_do_not_mutate() {
    let mut stack: ArrayStack<u32> = ArrayStack::new();
    let before = stack.clone();
    let _ = stack.pop();
    let _ = stack.peek();
    assert_eq!(before, stack);
}

#[test_log::test]
fn test_peek_is_idempotent() {
    let mut stack = LinkedStack::new();
    stack.push(10).push(20);
    for _ in 0..3 {
        assert_eq!(Ok(&20), stack.peek());
        assert_eq!(2, stack.size());
    }
    assert!(stack.check().is_ok());
}

#[test_log::test]
fn test_sentinels_survive_reuse() {
    let mut stack = ArrayStack::new();
    stack.push(1);
    assert_eq!(Ok(1), stack.pop());
    // drained back to empty, both sentinels apply again
    assert_eq!(Err(Sentinel::NoValue), stack.pop());
    assert_eq!(Err(Sentinel::Empty), stack.peek());
}
