use growvec::GrowVec;

#[test]
fn test_fill_remove_refill() {
    let mut v = GrowVec::new();

    // append 50..=64, fifteen values
    for i in 50..=64 {
        v.push(i).unwrap();
    }
    assert_eq!(v.len(), 15);
    let expected: Vec<i32> = (50..=64).collect();
    assert_eq!(v.as_slice(), expected.as_slice());

    // drop the third value
    let removed = v.remove(2).unwrap();
    assert_eq!(removed, 52);
    assert_eq!(v.len(), 14);
    assert_eq!(v[0], 50);
    assert_eq!(v[1], 51);
    assert_eq!(v[2], 53);
    assert_eq!(v[13], 64);

    v.push(69).unwrap();
    assert_eq!(v.len(), 15);
    assert_eq!(v[14], 69);
}

#[test]
fn test_slice_laws() {
    let v = GrowVec::from_slice(&[5, 6, 7, 8, 9]).unwrap();

    // the identity slice reproduces the contents
    let identity = v.slice(0, v.len(), 1).unwrap();
    assert_eq!(identity, v);

    // an empty range is always empty
    for k in 0..=v.len() {
        assert!(v.slice(k, k, 1).unwrap().is_empty());
    }

    // walking the whole array backwards reverses it
    let reversed = v.slice(v.len(), 0, -1).unwrap();
    assert_eq!(reversed.as_slice(), &[9, 8, 7, 6, 5]);
}

#[test]
fn test_copy_is_independent() {
    let mut original = GrowVec::with_length_hint(50);
    for i in 0..10 {
        original.push(i).unwrap();
    }

    let copy = original.try_clone().unwrap();
    assert_eq!(copy, original);
    assert_eq!(copy.length_hint(), Some(50));

    original.remove(0).unwrap();
    assert_eq!(copy.len(), 10);
    assert_eq!(copy[0], 0);

    let cloned = original.clone();
    assert_eq!(cloned, original);
}

#[test]
fn test_from_empty_slice_does_not_allocate() {
    let empty: &[i32] = &[];
    let v = GrowVec::from_slice(empty).unwrap();

    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 0);
}

#[test]
fn test_try_from_slice() {
    let v = GrowVec::try_from(&[1, 2, 3][..]).unwrap();
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_default_debug_and_equality() {
    let a: GrowVec<i32> = GrowVec::default();
    assert!(a.is_empty());

    let b = GrowVec::from_slice(&[1, 2]).unwrap();
    assert_eq!(format!("{b:?}"), "[1, 2]");

    let c = GrowVec::from_slice(&[1, 2]).unwrap();
    assert_eq!(b, c);
    assert_eq!(b, [1, 2]);
    assert_ne!(b, a);
}

#[test]
fn test_mixed_workflow_with_owned_elements() {
    let mut v = GrowVec::new();
    for word in ["delta", "echo", "foxtrot", "golf"] {
        v.push(String::from(word)).unwrap();
    }

    v.extend_from_self().unwrap();
    assert_eq!(v.len(), 8);

    let middle = v.slice(2, 6, 1).unwrap();
    assert_eq!(middle.len(), 4);
    assert_eq!(middle[0], "foxtrot");
    assert_eq!(middle[3], "echo");

    let every_other = v.slice(0, v.len(), 2).unwrap();
    assert_eq!(every_other.len(), 4);
    assert_eq!(every_other[0], "delta");
    assert_eq!(every_other[1], "foxtrot");

    while !v.is_empty() {
        v.remove(v.len() - 1).unwrap();
    }
    assert_eq!(v.len(), 0);
}

#[test]
fn test_capacity_invariant_over_workflows() {
    let mut v = GrowVec::with_length_hint(64);

    for round in 0..5 {
        for i in 0..200 {
            v.push(round * 200 + i).unwrap();
            assert!(v.len() <= v.capacity());
        }
        while v.len() > 32 {
            v.remove(v.len() - 1).unwrap();
            assert!(v.len() <= v.capacity());
        }
    }

    assert_eq!(v.len(), 32);
}
