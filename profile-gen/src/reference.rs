//! Fixed reference lists that every profile field is sampled from.

use std::ops::RangeInclusive;

/// Given names, used for `name` and the email local part
pub static FIRST_NAMES: [&str; 20] = [
    "Alice", "Bob", "Charlie", "Diana", "Edward", "Fiona", "George", "Hannah", "Ivan", "Julia",
    "Kevin", "Laura", "Michael", "Natalie", "Oscar", "Paula", "Quentin", "Rachel", "Steve", "Tina",
];

/// Family names, used for `name` and the email local part
pub static LAST_NAMES: [&str; 20] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
    "Wilson", "Anderson", "Taylor", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson",
    "Robinson", "Lewis",
];

/// Cities a profile can live in
pub static CITIES: [&str; 20] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "Fort Worth",
    "Columbus",
    "Charlotte",
    "Indianapolis",
    "San Francisco",
    "Seattle",
    "Denver",
    "Nashville",
];

/// Email domains
pub static DOMAINS: [&str; 5] =
    ["gmail.com", "yahoo.com", "outlook.com", "hotmail.com", "example.com"];

/// Inclusive age bounds
pub const AGE_RANGE: RangeInclusive<u8> = 18..=75;

/// Inclusive bounds of the number appended to the email local part
pub const EMAIL_NUMBER_RANGE: RangeInclusive<u16> = 1..=999;
