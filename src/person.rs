use crate::linkedlist::Named;
use core::fmt;
use std::cmp::Ordering;

/*
 * A person ordered by age only. Two people of the same age compare equal
 * whatever their names, so a stable sort keeps them in list order.
 * The name is borrowed, usually from the arena holding the list.
 */
#[derive(Clone, Copy)]
pub struct Person<'a> {
    pub name: &'a str,
    pub age: i32,
}

impl<'a> Person<'a> {
    pub fn new(name: &'a str, age: i32) -> Self {
        Person { name, age }
    }

    /*
     * Three-way comparison : negative, zero or positive when self is
     * younger, the same age or older. The sign of `self.age - other.age`,
     * without overflowing.
     */
    pub fn compare_to(&self, other: &Person) -> i32 {
        let diff = i64::from(self.age) - i64::from(other.age);
        diff.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}

impl<'a> fmt::Display for Person<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.age)
    }
}

impl<'a> fmt::Debug for Person<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person({}:{})", self.name, self.age)
    }
}

impl<'a> PartialEq for Person<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.age == other.age
    }
}

impl<'a> Eq for Person<'a> {}

impl<'a> PartialOrd for Person<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Ord for Person<'a> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other).cmp(&0)
    }
}

impl<'a> Named for Person<'a> {
    fn name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linkedlist::GenericList;
    use bumpalo::Bump;

    #[test]
    fn compare_to_sign() {
        let bill = Person::new("Bill", 19);
        let li = Person::new("Li", 28);
        assert!(bill.compare_to(&li) < 0);
        assert!(li.compare_to(&bill) > 0);
        assert_eq!(bill.compare_to(&Person::new("Other", 19)), 0);
        assert_eq!(li.compare_to(&bill), 9);
    }

    #[test]
    fn compare_to_does_not_overflow() {
        let young = Person::new("a", i32::MIN);
        let old = Person::new("b", i32::MAX);
        assert!(young.compare_to(&old) < 0);
        assert!(old.compare_to(&young) > 0);
        assert_eq!(young.cmp(&old), Ordering::Less);
    }

    #[test]
    fn equality_ignores_name() {
        assert_eq!(Person::new("Maria", 72), Person::new("Raul", 72));
        assert_ne!(Person::new("Maria", 72), Person::new("Maria", 73));
    }

    #[test]
    fn display() {
        assert_eq!(Person::new("Sandra", 23).to_string(), "Sandra:23");
    }

    fn names<'s>(list: &GenericList<'_, Person<'s>>) -> Vec<&'s str> {
        list.iter().map(|p| p.name).collect()
    }

    #[test]
    fn sorted_people_keep_order_of_equal_ages() {
        let bump = Bump::new();
        let mut list = GenericList::new(&bump);
        list.add_head(Person::new("A", 5));
        list.add_head(Person::new("B", 5));
        list.add_head(Person::new("C", 3));

        assert_eq!(names(&list), vec!["C", "B", "A"]);
        list.bubble_sort();
        assert_eq!(names(&list), vec!["C", "B", "A"]);

        list.add_head(Person::new("D", 5));
        list.add_head(Person::new("E", 4));
        list.bubble_sort();
        assert_eq!(names(&list), vec!["C", "E", "D", "B", "A"]);
    }

    #[test]
    fn find_first_occurrence_by_name() {
        let bump = Bump::new();
        let mut list = GenericList::new(&bump);
        list.add_head(Person::new("Gunnar", 18));
        list.add_head(Person::new("Alok", 9));
        list.add_head(Person::new("Gunnar", 30));

        assert_eq!(list.find_first_occurrence("Gunnar").map(|p| p.age), Some(30));
        assert_eq!(list.find_first_occurrence("Alok").map(|p| p.age), Some(9));
        assert!(list.find_first_occurrence("Hiroyuki").is_none());
    }
}
