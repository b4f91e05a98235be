//! Integration tests for `Sequence` mutation, projection, and set algebra.

use rstest::{fixture, rstest};
use sequery::prelude::*;

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Pet {
    name: &'static str,
    age: u32,
}

fn pet(name: &'static str, age: u32) -> Pet {
    Pet { name, age }
}

#[fixture]
fn fruits() -> Sequence<&'static str> {
    Sequence::from(vec!["apple", "banana", "mango", "orange", "passionfruit", "grape"])
}

#[fixture]
fn dinosaurs() -> Sequence<&'static str> {
    Sequence::from(vec![
        "Compsognathus",
        "Amargasaurus",
        "Oviraptor",
        "Velociraptor",
        "Deinonychus",
        "Dilophosaurus",
        "Gallimimus",
        "Triceratops",
    ])
}

#[fixture]
fn grades() -> Sequence<i32> {
    Sequence::from(vec![59, 82, 70, 56, 92, 98, 85])
}

// =============================================================================
// Mutation
// =============================================================================

#[rstest]
fn test_add_append_prepend() {
    let mut list = Sequence::new();
    list.add_range(["hey", "what's", "up"]);
    list.append("there");
    assert_eq!(list.last(), Ok(&"there"));
    list.prepend("oh");
    assert_eq!(list.first(), Ok(&"oh"));
    assert_eq!(list, vec!["oh", "hey", "what's", "up", "there"]);
}

#[rstest]
fn test_insert_at_both_ends() {
    let mut pets = Sequence::from(vec![pet("Barley", 10), pet("Boots", 4), pet("Whiskers", 6)]);
    let max = pet("Max", 12);

    pets.insert(0, max.clone()).unwrap();
    pets.insert(pets.len(), max.clone()).unwrap();

    assert_eq!(pets.first(), Ok(&max));
    assert_eq!(pets.last(), Ok(&max));
    assert_eq!(
        pets.insert(pets.len() + 1, max),
        Err(QueryError::IndexOutOfRange { index: 6, length: 5 })
    );
}

#[rstest]
fn test_remove_first_equal_occurrence(mut fruits: Sequence<&'static str>) {
    assert!(fruits.remove(&"orange"));
    assert!(!fruits.remove(&"strawberry"));
    assert_eq!(fruits.count(), 5);
    assert_eq!(fruits.index_of(&"orange"), None);
}

#[rstest]
fn test_remove_all(mut dinosaurs: Sequence<&'static str>) {
    dinosaurs.remove_all(|name| name.ends_with("saurus"));
    assert_eq!(
        dinosaurs,
        vec!["Compsognathus", "Oviraptor", "Velociraptor", "Deinonychus", "Gallimimus", "Triceratops"]
    );
}

#[rstest]
fn test_remove_at(mut dinosaurs: Sequence<&'static str>) {
    assert_eq!(dinosaurs.remove_at(3), Ok("Velociraptor"));
    assert_eq!(dinosaurs.len(), 7);
    assert_eq!(
        dinosaurs.remove_at(7),
        Err(QueryError::IndexOutOfRange { index: 7, length: 7 })
    );
}

#[rstest]
fn test_clear() {
    let mut pets = Sequence::from(vec![pet("Barley", 8), pet("Whiskers", 1)]);
    assert_eq!(pets.count(), 2);
    pets.clear();
    assert_eq!(pets.count(), 0);
}

// =============================================================================
// Generators
// =============================================================================

#[rstest]
fn test_range_squares() {
    let squares = Sequence::<i64>::range(1, 10).unwrap().select(|x| x * x);
    assert_eq!(squares, vec![1, 4, 9, 16, 25, 36, 49, 64, 81, 100]);
}

#[rstest]
fn test_repeat() {
    let repeated = Sequence::repeat(String::from("I like programming"), 3);
    assert_eq!(repeated.count(), 3);
    assert!(repeated.all(|text| text == "I like programming"));
}

#[rstest]
fn test_range_near_i64_max_is_rejected_not_wrapped() {
    let error = Sequence::range(i64::MAX, 2).unwrap_err();
    assert!(error.is_range_overflow());
    assert_eq!(Sequence::range(i64::MAX, 1).unwrap().to_vec(), [i64::MAX]);
}

// =============================================================================
// Standard Containers
// =============================================================================

#[rstest]
fn test_vec_keeps_its_inherent_methods_with_prelude_in_scope() {
    let mut numbers = vec![1, 2, 3];
    numbers.reverse();
    assert_eq!(numbers, vec![3, 2, 1]);
    assert_eq!(numbers.first(), Some(&3));
    assert!(numbers.contains(&2));
    assert_eq!(vec!["a", "b"].join(","), "a,b");
    assert_eq!([[1, 2], [3, 4]].concat(), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_vec_is_queried_through_sequence() {
    let numbers = vec![3, 1, 2];
    let wrapped = Sequence::from(numbers.clone());
    assert_eq!(wrapped.reverse().to_vec(), [2, 1, 3]);
    assert_eq!(wrapped.first(), Ok(&3));
    assert_eq!(numbers, vec![3, 1, 2]);
}

// =============================================================================
// Projection
// =============================================================================

#[rstest]
fn test_where_then_select() {
    let numbers = Sequence::from(vec![1, 2, 3, 4, 5]);
    assert_eq!(numbers.filter(|x| *x > 3).select(|y| y * 2), vec![8, 10]);
    assert_eq!(
        numbers.filter(|x| *x > 3).select(|y| format!("{y}a")),
        vec![String::from("4a"), String::from("5a")]
    );
}

#[rstest]
fn test_filter_by_length() {
    let fruits = Sequence::from(vec![
        "apple",
        "passionfruit",
        "banana",
        "mango",
        "orange",
        "blueberry",
        "grape",
        "strawberry",
    ]);
    assert_eq!(fruits.filter(|fruit| fruit.len() < 6), vec!["apple", "mango", "grape"]);
}

#[rstest]
fn test_concat_projected_names() {
    let cats = Sequence::from(vec![pet("Barley", 8), pet("Boots", 4), pet("Whiskers", 1)]);
    let dogs = Sequence::from(vec![pet("Bounder", 3), pet("Snoopy", 14), pet("Fido", 9)]);
    let names = cats.select(|cat| cat.name).concat(&dogs.select(|dog| dog.name));
    assert_eq!(names, vec!["Barley", "Boots", "Whiskers", "Bounder", "Snoopy", "Fido"]);
}

#[rstest]
fn test_select_many_flattens_in_order() {
    let owners = Sequence::from(vec![
        ("Higa, Sidney", Sequence::from(vec!["Scruffy", "Sam"])),
        ("Ashkenazi, Ronen", Sequence::from(vec!["Walker", "Sugar"])),
        ("Price, Vernette", Sequence::from(vec!["Scratches", "Diesel"])),
    ]);
    let pets = owners.select_many(|(_, pets)| pets.iter().copied());
    assert_eq!(pets, vec!["Scruffy", "Sam", "Walker", "Sugar", "Scratches", "Diesel"]);
}

#[rstest]
fn test_zip_truncates_to_shorter() {
    let numbers = Sequence::from(vec![1, 2, 3, 4]);
    let words = Sequence::from(vec!["one", "two", "three"]);
    assert_eq!(
        numbers.zip(&words, |number, word| format!("{number} {word}")).to_vec(),
        ["1 one", "2 two", "3 three"]
    );
    assert_eq!(
        words.zip(&numbers, |word, number| format!("{word} {number}")).to_vec(),
        ["one 1", "two 2", "three 3"]
    );
}

#[rstest]
fn test_default_if_empty() {
    let pets = Sequence::from(vec![pet("Barley", 8), pet("Boots", 4), pet("Whiskers", 1)]);
    assert_eq!(
        pets.default_if_empty_with(pet("Default", 0)).select(|pet| pet.name),
        vec!["Barley", "Boots", "Whiskers"]
    );
    assert_eq!(Sequence::<i32>::new().default_if_empty(), vec![0]);
}

#[rstest]
fn test_for_each_passes_index() {
    let names = Sequence::from(vec!["Bruce", "Alfred", "Tim", "Richard"]);
    let mut rendered = String::new();
    names.for_each(|name, index| rendered.push_str(&format!("{name} {index} ")));
    assert_eq!(rendered, "Bruce 0 Alfred 1 Tim 2 Richard 3 ");
}

#[rstest]
fn test_slicing_after_descending_order(grades: Sequence<i32>) {
    let ordered = grades.order_by_descending(|grade| *grade);
    assert_eq!(ordered.skip(3), vec![82, 70, 59, 56]);
    assert_eq!(ordered.skip_last(3), vec![98, 92, 85, 82]);
    assert_eq!(ordered.skip_while(|grade| *grade >= 80), vec![70, 59, 56]);
    assert_eq!(ordered.take(3), vec![98, 92, 85]);
    assert_eq!(ordered.take_last(3), vec![70, 59, 56]);
}

#[rstest]
fn test_take_while(fruits: Sequence<&'static str>) {
    assert_eq!(
        fruits.take_while(|fruit| *fruit != "orange"),
        vec!["apple", "banana", "mango"]
    );
}

#[rstest]
fn test_reverse_does_not_mutate_source() {
    let numbers = Sequence::from(vec![1, 2, 3, 4, 5]);
    assert_eq!(numbers.reverse(), vec![5, 4, 3, 2, 1]);
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

// =============================================================================
// Runtime variants
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Animal {
    Dog { name: &'static str },
    Cat { name: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
struct Dog {
    name: &'static str,
}

impl Dog {
    fn speak(&self) -> &'static str {
        "Bark"
    }
}

impl TryFrom<&Animal> for Dog {
    type Error = ();

    fn try_from(animal: &Animal) -> Result<Self, Self::Error> {
        match animal {
            Animal::Dog { name } => Ok(Self { name: *name }),
            Animal::Cat { .. } => Err(()),
        }
    }
}

#[rstest]
fn test_of_type_keeps_matching_variants() {
    let pets = Sequence::from(vec![
        Animal::Dog { name: "Barley" },
        Animal::Cat { name: "Whiskers" },
    ]);
    let dogs = pets.of_type::<Dog>();
    assert_eq!(dogs.count(), 1);
    assert_eq!(dogs.first().map(Dog::speak), Ok("Bark"));
    assert_eq!(dogs.first().map(|dog| dog.name), Ok("Barley"));
}

#[rstest]
fn test_cast_widens_every_element() {
    let small = Sequence::from(vec![1_u8, 2, 255]);
    let wide: Sequence<u32> = small.cast();
    assert_eq!(wide, vec![1, 2, 255]);
}

// =============================================================================
// Set algebra
// =============================================================================

#[rstest]
fn test_distinct_numbers_and_composites() {
    let ages = Sequence::from(vec![21, 46, 46, 55, 17, 21, 55, 55]);
    assert_eq!(ages.distinct(), vec![21, 46, 55, 17]);

    let pets = Sequence::from(vec![
        pet("Whiskers", 1),
        pet("Whiskers", 1),
        pet("Barley", 8),
        pet("Barley", 8),
        pet("Corey", 9),
    ]);
    assert_eq!(
        pets.distinct(),
        vec![pet("Whiskers", 1), pet("Barley", 8), pet("Corey", 9)]
    );
}

#[rstest]
fn test_distinct_by_age() {
    let pets = Sequence::from(vec![pet("Whiskers", 1), pet("Boots", 4), pet("Barley", 8), pet("Daisy", 4)]);
    assert_eq!(
        pets.distinct_by(|pet| pet.age),
        vec![pet("Whiskers", 1), pet("Boots", 4), pet("Barley", 8)]
    );
}

#[rstest]
fn test_union() {
    let first = Sequence::from(vec![5, 3, 9, 7, 5, 9, 3, 7]);
    let second = Sequence::from(vec![8, 3, 6, 4, 4, 9, 1, 0]);
    assert_eq!(first.union(&second), vec![5, 3, 9, 7, 8, 6, 4, 1, 0]);

    let store1 = Sequence::from(vec![("apple", 9), ("orange", 4)]);
    let store2 = Sequence::from(vec![("apple", 9), ("lemon", 12)]);
    assert_eq!(
        store1.union(&store2),
        vec![("apple", 9), ("orange", 4), ("lemon", 12)]
    );
}

#[rstest]
fn test_except_with_floats() {
    let first = Sequence::from(vec![2.0, 2.1, 2.2, 2.3, 2.4, 2.5]);
    let second = Sequence::from(vec![2.2, 2.3]);
    assert_eq!(first.except(&second), vec![2.0, 2.1, 2.4, 2.5]);
}

#[rstest]
fn test_intersect_sum() {
    let first = Sequence::from(vec![44, 26, 92, 30, 71, 38]);
    let second = Sequence::from(vec![39, 59, 83, 47, 26, 4, 30]);
    assert_eq!(first.intersect(&second).sum_by(|x| *x), 56);
}

#[rstest]
fn test_sequence_equal() {
    let turbo = pet("Turbo", 2);
    let peanut = pet("Peanut", 8);
    let pets1 = Sequence::from(vec![turbo.clone(), peanut.clone()]);
    let pets2 = Sequence::from(vec![turbo.clone(), peanut]);
    let pets3 = Sequence::from(vec![turbo]);
    assert!(pets1.sequence_equal(&pets2));
    assert!(!pets1.sequence_equal(&pets3));
}

#[rstest]
fn test_contains_and_count(fruits: Sequence<&'static str>) {
    assert!(fruits.contains(&"mango"));
    assert_eq!(fruits.count(), 6);
    assert_eq!(fruits.count_where(|fruit| fruit.len() > 5), 3);
}
