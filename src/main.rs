use anyhow::{anyhow, Context, Result};
use bumpalo::Bump;
use linkedlist::GenericList;
use person::Person;
use regex::Regex;
use std::{env, fs::File, io::Read, process};

mod linkedlist;
mod person;

/*
 * Roster used when no file is given
 */
const DEFAULT_NAMES: [&str; 10] = [
    "Franscoise",
    "Bill",
    "Li",
    "Sandra",
    "Gunnar",
    "Alok",
    "Hiroyuki",
    "Maria",
    "Alessandro",
    "Raul",
];
const DEFAULT_AGES: [i32; 10] = [45, 19, 28, 23, 18, 9, 108, 72, 30, 35];

/*
 * Parse a roster into people.
 * Input should be a list of lines, each formatted as follows :
 * <name>:<age>
 * Blank lines and lines starting with '#' are skipped.
 *
 * <bump> is the arena allocator where all names are copied
 */
fn parse_roster<'a>(input: &str, bump: &'a Bump) -> Result<Vec<Person<'a>>> {
    let re = Regex::new(r"^\s*([^:]*[^:\s])\s*:\s*(-?\d+)\s*$")?;
    let mut people = vec![];

    for (n, l) in input.lines().enumerate() {
        let trimmed = l.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let captures = re
            .captures(l)
            .ok_or(anyhow!("Failed to parse line {} : {}", n + 1, l))?;
        let (_, [name, age]) = captures.extract();
        let age: i32 = age
            .parse()
            .with_context(|| format!("Invalid age on line {} : {}", n + 1, age))?;
        people.push(Person::new(bump.alloc_str(name), age));
    }

    Ok(people)
}

fn default_roster() -> Vec<Person<'static>> {
    DEFAULT_NAMES
        .into_iter()
        .zip(DEFAULT_AGES)
        .map(|(name, age)| Person::new(name, age))
        .collect()
}

fn print_list(list: &GenericList<Person>) {
    for p in list {
        println!("{}", p);
    }
}

fn main() -> Result<()> {
    println!("Sorted linked list poc in rust :D");
    if env::args().len() > 2 {
        println!(
            "Usage : {} [roster file]",
            env::args().next().unwrap_or_default()
        );
        process::exit(1);
    }

    let bump = Bump::new();
    let people = match env::args().nth(1) {
        Some(path) => {
            let mut f = File::open(&path).context("Failed to open file")?;
            let mut input = String::new();
            f.read_to_string(&mut input)
                .context("Failed to read file")?;
            parse_roster(&input, &bump).context("Failed to parse roster")?
        }
        None => default_roster(),
    };

    let mut list = GenericList::new(&bump);
    for p in people {
        list.add_head(p);
    }

    print_list(&list);
    println!("Done with unsorted list");

    let swaps = list.bubble_sort();

    print_list(&list);
    println!("Done with sorted list");
    println!("{} people, {} swaps", list.len(), swaps);

    if let Some(first) = first_name(&list) {
        let found = list
            .find_first_occurrence(first)
            .ok_or(anyhow!("Failed to find {} again", first))?;
        println!("Youngest : {}", found);
    }

    Ok(())
}

fn first_name<'a>(list: &GenericList<'_, Person<'a>>) -> Option<&'a str> {
    list.iter().next().map(|p| p.name)
}
