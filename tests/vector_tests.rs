use bufcoll::{BufConfig, CollectionError, Vector};

fn contents(vector: &Vector<i32>) -> Vec<i32> {
    vector.iter().copied().collect()
}

#[test]
fn test_vector_initialization() {
    let vector: Vector<f64> = Vector::new();

    assert_eq!(vector.len(), 0);
    assert!(vector.is_empty());
    assert!(!vector.is_full());
    assert_eq!(vector.capacity(), 8);
    assert_eq!(vector.element_size(), 8);
}

#[test]
fn test_custom_capacity() {
    let vector: Vector<u8> = Vector::with_capacity(32);
    assert_eq!(vector.capacity(), 32);

    let vector: Vector<u8> = Vector::with_capacity(0);
    assert_eq!(vector.capacity(), bufcoll::MIN_CAPACITY);

    let vector: Vector<u8> = Vector::with_config(BufConfig::vector().with_capacity(4).with_min_capacity(8));
    assert_eq!(vector.capacity(), 8);
}

#[test]
fn test_strings_head_and_tail() {
    let mut vector = Vector::new();

    vector.push("Hello World");
    assert_eq!(vector.len(), 1);

    vector.push("Hello World 2");
    vector.push("Hello World 3");
    vector.push("Hello World 4");
    vector.push("Hello World 5");
    vector.push("Hello World 6");
    assert_eq!(*vector.get(0), "Hello World");
    assert_eq!(*vector.get(vector.len() - 1), "Hello World 6");

    let last = vector.len() - 1;
    assert_eq!(vector.set(last, "This is not hell world"), "Hello World 6");
    assert_eq!(*vector.get(last), "This is not hell world");

    assert_eq!(vector.pop_front(), "Hello World");
    assert_eq!(vector.len(), 5);
    assert_eq!(*vector.get(0), "Hello World 2");
}

#[test]
fn test_mutation_through_iter_mut() {
    let mut vector: Vector<f64> = Vector::new();
    vector.push(9.8);
    vector.push(2.5);
    vector.push(1.0);

    for value in vector.iter_mut() {
        *value += 1.0;
    }
    assert!((vector.get(0) - 10.8).abs() < f64::EPSILON);
    assert_eq!(vector.len(), 3);
}

#[test]
fn test_user_struct_elements() {
    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: String,
        age: u32,
    }

    let mut users = Vector::with_capacity(32);
    users.push(User {
        name: "Jeremy".to_string(),
        age: 28,
    });
    users.get_mut(0).age += 1;

    assert_eq!(users.capacity(), 32);
    assert_eq!(users.get(0).name, "Jeremy");
    assert_eq!(users.get(0).age, 29);
}

#[test]
fn test_insert_remove_net_length_and_order() {
    let mut vector = Vector::new();
    let mut inserts = 0;
    let mut removes = 0;

    for i in 0..20_usize {
        let index = (i * 7) % (vector.len() + 1);
        vector.insert(index, i32::try_from(i).unwrap());
        inserts += 1;
        if i % 3 == 0 {
            let remove_at = (i * 5) % vector.len();
            let before = contents(&vector);
            let removed = vector.remove(remove_at);

            let mut expected = before;
            assert_eq!(expected.remove(remove_at), removed);
            assert_eq!(contents(&vector), expected);
            removes += 1;
        }
    }

    assert_eq!(vector.len(), inserts - removes);
}

#[test]
fn test_insert_preserves_relative_order() {
    let mut vector = Vector::new();
    vector.extend([1, 2, 3, 4]);

    vector.insert(2, 99);
    assert_eq!(contents(&vector), [1, 2, 99, 3, 4]);

    vector.remove(2);
    assert_eq!(contents(&vector), [1, 2, 3, 4]);
}

#[test]
fn test_growth_preserves_values() {
    let mut vector = Vector::new();
    for i in 0..8 {
        vector.push(i * 100);
    }
    assert!(vector.is_full());
    assert_eq!(vector.capacity(), 8);

    vector.push(800);
    assert_eq!(vector.capacity(), 16);
    for i in 0..9 {
        assert_eq!(*vector.get(i), i32::try_from(i).unwrap() * 100);
    }

    for i in 9..40 {
        vector.push(i * 100);
    }
    assert_eq!(vector.capacity(), 64);
    assert_eq!(vector.len(), 40);
    assert_eq!(*vector.get(39), 3900);
}

#[test]
fn test_insert_at_head_when_full_grows() {
    let mut vector = Vector::with_capacity(2);
    vector.push_front(2);
    vector.push_front(1);
    vector.push_front(0);

    assert_eq!(vector.capacity(), 4);
    assert_eq!(contents(&vector), [0, 1, 2]);
}

#[test]
fn test_remove_never_shrinks() {
    let mut vector = Vector::with_capacity(4);
    vector.extend(0..10);
    assert_eq!(vector.capacity(), 16);

    while !vector.is_empty() {
        vector.pop();
    }
    assert_eq!(vector.capacity(), 16);
}

#[test]
fn test_release_twice() {
    let mut vector = Vector::new();
    vector.extend([1, 2, 3]);

    vector.release();
    assert!(vector.is_released());
    assert_eq!(vector.len(), 0);
    assert_eq!(vector.capacity(), 0);
    assert!(vector.is_empty());
    assert!(!vector.is_full());

    vector.release();
    assert!(vector.is_released());
    assert_eq!(vector.len(), 0);
    assert_eq!(vector.capacity(), 0);

    assert_eq!(vector.try_push(4), Err(CollectionError::Released));
    assert_eq!(vector.try_get(0), Err(CollectionError::Released));
}

#[test]
fn test_reconstruction_after_release() {
    let mut vector = Vector::new();
    vector.push(1);
    vector.release();

    vector = Vector::with_capacity(4);
    vector.push(2);
    assert_eq!(contents(&vector), [2]);
}
