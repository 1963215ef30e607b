//! Reads three integer sets from standard input, one per line as
//! space-separated values, and prints the results of the classical set
//! operations on them.

use std::error::Error;
use std::io::{self, BufRead};

use setalg::{ops, Set};

fn read_set(input: &mut impl BufRead) -> Result<Set<i32>, Box<dyn Error>> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    let mut set = Set::new();
    for token in line.split_whitespace() {
        set.insert(token.parse::<i32>()?);
    }

    Ok(set)
}

fn print_set(title: &str, set: &Set<i32>) {
    print!("{}", title);
    for item in set {
        print!("{} ", item);
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Enter the values of the first set.");
    let set1 = read_set(&mut input)?;
    println!("Enter the values of the second set.");
    let set2 = read_set(&mut input)?;
    println!("Enter the values of the third set.");
    let set3 = read_set(&mut input)?;

    let union = ops::union(Some(&set1), Some(&set2))?;
    let difference = ops::difference(Some(&set1), Some(&set2))?;
    let intersection = ops::intersection(Some(&set1), Some(&set2))?;
    let subset1 = ops::subset(Some(&set3), Some(&set1))?;
    let subset2 = ops::subset(Some(&set3), Some(&set2))?;

    print_set("First set: ", &set1);
    print_set("Second set: ", &set2);
    print_set("Third set: ", &set3);

    print_set("Union of the first and second sets: ", &union);
    print_set("Difference of the first and second sets: ", &difference);
    print_set("Intersection of the first and second sets: ", &intersection);

    if subset1 {
        println!("The third set is a subset of the first.");
    } else {
        println!("The third set is not a subset of the first.");
    }

    if subset2 {
        println!("The third set is a subset of the second.");
    } else {
        println!("The third set is not a subset of the second.");
    }

    Ok(())
}
