use chrono::{Duration, Utc};
use rand::Rng;

use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::utils::{id, time};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "Sofia", "Omar", "Priya", "Wei", "Fatima", "Lucas",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
    "Lopez", "Nguyen", "Kim", "Patel", "Hernandez", "Khan", "Silva",
];

const TEN_YEARS_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// One synthetic employee with randomized fields, hired some time within
/// the last ten years.
pub fn random_employee<R: Rng + ?Sized>(rng: &mut R) -> Employee {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    let hired = Utc::now() - Duration::seconds(rng.gen_range(0..TEN_YEARS_SECS));

    Employee {
        id: id::generate_id(),
        name: format!("{} {}", first, last),
        age: rng.gen_range(18..=65),
        is_active: rng.gen(),
        department: Department::ALL[rng.gen_range(0..Department::ALL.len())],
        salary: rng.gen_range(30_000..=150_000),
        hire_date: time::iso_millis(hired),
        image: None,
    }
}

pub fn random_employees(count: u32) -> Vec<Employee> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_employee(&mut rng)).collect()
}
