use relay_chain::ActionBlock;
use relay_core::{effect, Action};

#[derive(Clone, Debug, PartialEq)]
struct Scale {
    factor: i32,
}

impl Action<i32> for Scale {
    fn call(&mut self, x: &mut i32) -> bool {
        *x *= self.factor;
        true
    }
}

#[test]
fn invokes_held_action() {
    let mut block: ActionBlock<i32> = ActionBlock::new(Scale { factor: 3 });
    let mut x = 2;
    assert!(block.invoke(&mut x));
    assert_eq!(x, 6);
}

#[test]
fn downcast_to_concrete_action() {
    let mut block: ActionBlock<i32> = ActionBlock::new(Scale { factor: 3 });
    assert!(block.is::<Scale>());
    assert!(block.type_name().ends_with("Scale"));

    block.downcast_mut::<Scale>().unwrap().factor = 5;
    let copy = block.clone();
    block.downcast_mut::<Scale>().unwrap().factor = 7;

    assert_eq!(copy.downcast_ref::<Scale>(), Some(&Scale { factor: 5 }));
    assert_eq!(block.downcast_ref::<Scale>(), Some(&Scale { factor: 7 }));
}

#[test]
fn closure_block_is_not_a_struct() {
    let block: ActionBlock<i32> = ActionBlock::new(effect(|x: &mut i32| *x += 1));
    assert!(!block.is::<Scale>());
    assert!(block.downcast_ref::<Scale>().is_none());
}
