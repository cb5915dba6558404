//! Deterministic user generation
//!
//! Each user is derived from its index alone through a 32-bit linear
//! congruential generator, so `generate_user(7)` is the same record on every
//! run and on every instance.

use chrono::Utc;
use tiercache_domain::User;

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Eva", "Frank", "Grace", "Henry", "Iris", "Jack", "Karen",
    "Leo", "Maria", "Nathan", "Olivia", "Peter", "Quinn", "Rachel", "Sam", "Tina", "Uma",
    "Victor", "Wendy", "Xander", "Yara", "Zach", "Ava", "Brian", "Clara", "Daniel", "Emma",
    "Felix", "Gina", "Hugo", "Isla", "James", "Kira", "Liam", "Maya", "Nora",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson",
];

const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
    "Product",
    "Design",
    "Legal",
    "Customer Success",
];

const STATUSES: &[&str] = &["active", "inactive", "pending"];

const ROLES: &[&str] = &["admin", "manager", "engineer", "analyst", "designer", "intern"];

const CITIES: &[&str] = &[
    "New York",
    "San Francisco",
    "Austin",
    "Seattle",
    "Chicago",
    "Boston",
    "Los Angeles",
    "Denver",
    "Miami",
    "Atlanta",
];

/// 32-bit LCG yielding values in `[0, 1)`
struct Lcg(u32);

impl Lcg {
    fn new(seed: u32) -> Self {
        Self(seed)
    }

    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f64::from(self.0) / 4_294_967_296.0
    }

    /// Integer in `[0, span)`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn below(&mut self, span: u32) -> u32 {
        (self.next_unit() * f64::from(span)).floor() as u32
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        let span = u32::try_from(items.len()).unwrap_or(u32::MAX);
        items[self.below(span) as usize]
    }
}

/// Build the user for a 1-based index
pub fn generate_user(index: u32) -> User {
    let mut rng = Lcg::new(index.wrapping_mul(31_337));

    let first_name = rng.pick(FIRST_NAMES);
    let last_name = rng.pick(LAST_NAMES);
    let department = rng.pick(DEPARTMENTS);
    let status = rng.pick(STATUSES);
    let role = rng.pick(ROLES);
    let city = rng.pick(CITIES);
    let salary = 40_000 + rng.below(120_000);
    let age = 22 + rng.below(38);
    let year = 2018 + rng.below(6);
    let month = 1 + rng.below(12);
    let day = 1 + rng.below(28);

    User {
        id: format!("user_{index:04}"),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        name: format!("{first_name} {last_name}"),
        email: format!(
            "{}.{}{index}@company.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        department: department.to_string(),
        role: role.to_string(),
        status: status.to_string(),
        city: city.to_string(),
        salary,
        age,
        joined_at: format!("{year}-{month:02}-{day:02}"),
        updated_at: Utc::now(),
    }
}

/// Users `1..=count`, in id order
pub fn seed_users(count: usize) -> Vec<User> {
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    (1..=count).map(generate_user).collect()
}
