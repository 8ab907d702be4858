//! Record and scalar generators.
//!
//! Every generator takes the RNG explicitly so callers decide between the
//! thread RNG (server) and a seeded one (tests).

use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::Serialize;

use crate::data::*;

const SECONDS_PER_DAY: i64 = 86_400;
const DAYS_PER_YEAR: i64 = 365;

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub avatar: String,
    pub bio: String,
    pub job_title: String,
    pub gender: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub time_zone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub industry: String,
    pub description: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub employees: u32,
    pub founded: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub material: String,
    pub color: String,
    pub sku: String,
    pub barcode: String,
    pub weight: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finance {
    pub account_number: String,
    pub routing_number: String,
    pub credit_card_number: String,
    #[serde(rename = "creditCardCVV")]
    pub credit_card_cvv: String,
    pub iban: String,
    pub bic: String,
    pub bitcoin: String,
    pub amount: String,
    pub transaction_type: String,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Internet {
    pub email: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub domain: String,
    pub ip: String,
    pub ipv6: String,
    pub mac: String,
    pub user_agent: String,
    pub color: String,
}

pub fn person<R: Rng + ?Sized>(rng: &mut R) -> Person {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    Person {
        first_name: first.to_string(),
        last_name: last.to_string(),
        full_name: format!("{first} {last}"),
        email: email_for(rng, first, last),
        phone: phone_number(rng),
        date_of_birth: birthdate(rng),
        avatar: avatar(rng),
        bio: bio(rng),
        job_title: job_title(rng),
        gender: pick(rng, GENDERS).to_string(),
    }
}

pub fn address<R: Rng + ?Sized>(rng: &mut R) -> Address {
    Address {
        street_address: street_address(rng),
        city: city(rng),
        state: pick(rng, STATES).to_string(),
        country: pick(rng, COUNTRIES).to_string(),
        zip_code: digits(rng, 5),
        latitude: round4(rng.gen_range(-90.0..=90.0)),
        longitude: round4(rng.gen_range(-180.0..=180.0)),
        time_zone: pick(rng, TIME_ZONES).to_string(),
    }
}

pub fn company<R: Rng + ?Sized>(rng: &mut R) -> Company {
    Company {
        name: company_name(rng),
        industry: format!(
            "{} {} {}",
            pick(rng, BUZZ_VERBS),
            pick(rng, BUZZ_ADJECTIVES),
            pick(rng, BUZZ_NOUNS)
        ),
        description: format!(
            "{} {} {}",
            pick(rng, CATCH_ADJECTIVES),
            pick(rng, CATCH_DESCRIPTORS),
            pick(rng, CATCH_NOUNS)
        ),
        website: url(rng),
        email: email(rng),
        phone: phone_number(rng),
        employees: rng.gen_range(1..=10_000),
        founded: past(rng, 50),
    }
}

pub fn product<R: Rng + ?Sized>(rng: &mut R) -> Product {
    let adjective = pick(rng, PRODUCT_ADJECTIVES);
    let material = pick(rng, PRODUCT_MATERIALS);
    let noun = pick(rng, PRODUCT_NOUNS);
    let category = pick(rng, DEPARTMENTS);
    Product {
        name: format!("{adjective} {material} {noun}"),
        description: format!(
            "The {} {} is made from {} and a favourite in our {} range.",
            adjective.to_lowercase(),
            noun.to_lowercase(),
            material.to_lowercase(),
            category.to_lowercase()
        ),
        price: price(rng),
        category: category.to_string(),
        material: material.to_string(),
        color: pick(rng, COLORS).to_string(),
        sku: alphanumeric(rng, 8),
        barcode: digits(rng, 12),
        weight: format!("{:.2} lbs", rng.gen_range(0.1..100.0)),
    }
}

pub fn finance<R: Rng + ?Sized>(rng: &mut R) -> Finance {
    Finance {
        account_number: digits(rng, 8),
        routing_number: routing_number(rng),
        credit_card_number: credit_card_number(rng),
        credit_card_cvv: digits(rng, 3),
        iban: iban(rng),
        bic: bic(rng),
        bitcoin: bitcoin_address(rng),
        amount: format!("{:.2}", rng.gen_range(0.0..1000.0)),
        transaction_type: pick(rng, TRANSACTION_TYPES).to_string(),
        currency: pick(rng, CURRENCY_CODES).to_string(),
    }
}

pub fn internet<R: Rng + ?Sized>(rng: &mut R) -> Internet {
    Internet {
        email: email(rng),
        username: username(rng),
        password: password(rng),
        url: url(rng),
        domain: domain(rng),
        ip: Ipv4Addr::from(rng.r#gen::<u32>()).to_string(),
        ipv6: Ipv6Addr::from(rng.r#gen::<u128>()).to_string(),
        mac: mac_address(rng),
        user_agent: pick(rng, USER_AGENTS).to_string(),
        color: format!("#{:06x}", rng.gen_range(0..=0x00ff_ffffu32)),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalars
// ─────────────────────────────────────────────────────────────────────────────

pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

pub fn digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

pub fn alphanumeric<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

pub fn full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    email_for(rng, first, last)
}

fn email_for<R: Rng + ?Sized>(rng: &mut R, first: &str, last: &str) -> String {
    format!(
        "{first}.{last}{}@{}",
        rng.gen_range(1..100),
        pick(rng, EMAIL_PROVIDERS)
    )
}

pub fn username<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    match rng.gen_range(0..3) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}_{last}{}", rng.gen_range(1..100)),
        _ => format!("{first}{}", rng.gen_range(1..10_000)),
    }
}

pub fn password<R: Rng + ?Sized>(rng: &mut R) -> String {
    alphanumeric(rng, 15)
}

pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let format = pick(rng, PHONE_FORMATS);
    format
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.gen_range(0..10u8)),
            other => other,
        })
        .collect()
}

pub fn avatar<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "https://avatars.githubusercontent.com/u/{}",
        rng.gen_range(1..100_000_000u32)
    )
}

pub fn job_title<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, JOB_DESCRIPTORS),
        pick(rng, JOB_AREAS),
        pick(rng, JOB_TYPES)
    )
}

fn bio<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}, {} {}",
        pick(rng, BIO_NOUNS),
        pick(rng, BIO_NOUNS),
        pick(rng, BIO_EMOJI)
    )
}

pub fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.gen_range(1..10_000),
        pick(rng, STREET_NAMES),
        pick(rng, STREET_SUFFIXES)
    )
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    let base = format!("{}{}", pick(rng, LAST_NAMES), pick(rng, CITY_SUFFIXES));
    if rng.gen_bool(0.3) {
        format!("{} {base}", pick(rng, CITY_PREFIXES))
    } else {
        base
    }
}

pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{} - {}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

pub fn product_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, PRODUCT_ADJECTIVES),
        pick(rng, PRODUCT_MATERIALS),
        pick(rng, PRODUCT_NOUNS)
    )
}

pub fn price<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:.2}", rng.gen_range(1.0..1000.0))
}

pub fn domain<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}-{}.{}",
        pick(rng, PRODUCT_ADJECTIVES).to_lowercase(),
        pick(rng, PRODUCT_NOUNS).to_lowercase(),
        pick(rng, DOMAIN_SUFFIXES)
    )
}

pub fn url<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("https://{}/", domain(rng))
}

fn mac_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bytes: [u8; 6] = rng.r#gen();
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}

pub fn uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.r#gen())
        .into_uuid()
        .to_string()
}

/// ISBN-13 with a valid check digit, hyphenated `978-G-PPPP-TTTT-C`.
pub fn isbn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let body = format!("978{}", digits(rng, 9));
    let check = isbn13_check_digit(&body);
    format!(
        "{}-{}-{}-{}-{check}",
        &body[..3],
        &body[3..4],
        &body[4..8],
        &body[8..12]
    )
}

pub fn word<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, LOREM_WORDS).to_string()
}

pub fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.gen_range(3..=10);
    let words: Vec<&str> = (0..count).map(|_| pick(rng, LOREM_WORDS)).collect();
    let text = words.join(" ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

pub fn paragraph<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..3).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}

pub fn birthdate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let age_days = rng.gen_range(18 * DAYS_PER_YEAR..=80 * DAYS_PER_YEAR);
    let offset = age_days * SECONDS_PER_DAY + rng.gen_range(0..SECONDS_PER_DAY);
    iso(Utc::now() - TimeDelta::seconds(offset))
}

/// A moment within the last `years` years.
pub fn past<R: Rng + ?Sized>(rng: &mut R, years: i64) -> String {
    let offset = rng.gen_range(1..=years * DAYS_PER_YEAR * SECONDS_PER_DAY);
    iso(Utc::now() - TimeDelta::seconds(offset))
}

/// A moment within the last day.
pub fn recent<R: Rng + ?Sized>(rng: &mut R) -> String {
    let offset = rng.gen_range(1..=SECONDS_PER_DAY);
    iso(Utc::now() - TimeDelta::seconds(offset))
}

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Financial identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Nine-digit ABA routing number with a valid checksum.
pub fn routing_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let body = digits(rng, 8);
    let sum: u32 = body
        .bytes()
        .zip([3, 7, 1].iter().cycle())
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();
    let check = (10 - sum % 10) % 10;
    format!("{body}{check}")
}

/// Luhn-valid 16-digit card number, grouped in fours.
pub fn credit_card_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let body = format!("4{}", digits(rng, 14));
    let number = format!("{body}{}", luhn_check_digit(&body));
    number
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("-")
}

/// German IBAN with valid mod-97 check digits.
pub fn iban<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bban = digits(rng, 18);
    // "DE" maps to 13 14; check digits are computed with "00" in place.
    let check = 98 - mod97(&format!("{bban}131400"));
    format!("DE{check:02}{bban}")
}

pub fn bic<R: Rng + ?Sized>(rng: &mut R) -> String {
    let bank: String = (0..4)
        .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
        .collect();
    let country = pick(rng, &["DE", "FR", "GB", "NL", "US", "CH"]);
    let location = alphanumeric(rng, 2).to_uppercase();
    format!("{bank}{country}{location}")
}

pub fn bitcoin_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = if rng.gen_bool(0.5) { '1' } else { '3' };
    let len = rng.gen_range(25..=33);
    std::iter::once(prefix)
        .chain((0..len).map(|_| {
            char::from(BITCOIN_ALPHABET[rng.gen_range(0..BITCOIN_ALPHABET.len())])
        }))
        .collect()
}

fn luhn_check_digit(body: &str) -> u8 {
    let sum: u32 = body
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

fn isbn13_check_digit(body: &str) -> u32 {
    let sum: u32 = body
        .bytes()
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    (10 - sum % 10) % 10
}

fn mod97(numeric: &str) -> u32 {
    numeric
        .bytes()
        .fold(0, |acc, b| (acc * 10 + u32::from(b - b'0')) % 97)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn luhn_valid(number: &str) -> bool {
        let digits: String = number.chars().filter(char::is_ascii_digit).collect();
        let (body, check) = digits.split_at(digits.len() - 1);
        luhn_check_digit(body).to_string() == check
    }

    #[test]
    fn person_fields_are_consistent() {
        let mut rng = rng();
        for _ in 0..20 {
            let p = person(&mut rng);
            assert_eq!(p.full_name, format!("{} {}", p.first_name, p.last_name));
            assert!(p.email.contains('@'));
            assert!(p.email.starts_with(&p.first_name));
            assert!(p.avatar.starts_with("https://"));
            assert!(DateTime::parse_from_rfc3339(&p.date_of_birth).is_ok());
        }
    }

    #[test]
    fn address_coordinates_are_in_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let a = address(&mut rng);
            assert!((-90.0..=90.0).contains(&a.latitude));
            assert!((-180.0..=180.0).contains(&a.longitude));
            assert_eq!(a.zip_code.len(), 5);
        }
    }

    #[test]
    fn company_employees_and_founding_are_bounded() {
        let mut rng = rng();
        let fifty_years_ago = Utc::now() - TimeDelta::days(50 * DAYS_PER_YEAR + 1);
        for _ in 0..50 {
            let c = company(&mut rng);
            assert!((1..=10_000).contains(&c.employees));
            let founded = DateTime::parse_from_rfc3339(&c.founded).unwrap();
            assert!(founded > fifty_years_ago);
            assert!(founded <= Utc::now());
        }
    }

    #[test]
    fn product_codes_have_fixed_shapes() {
        let mut rng = rng();
        for _ in 0..20 {
            let p = product(&mut rng);
            assert_eq!(p.sku.len(), 8);
            assert!(p.sku.chars().all(|c| c.is_ascii_alphanumeric()));
            assert_eq!(p.barcode.len(), 12);
            assert!(p.barcode.chars().all(|c| c.is_ascii_digit()));
            assert!(p.weight.ends_with(" lbs"));
            assert!(p.price.parse::<f64>().is_ok());
        }
    }

    #[test]
    fn finance_identifiers_carry_valid_checksums() {
        let mut rng = rng();
        for _ in 0..50 {
            let f = finance(&mut rng);
            assert!(luhn_valid(&f.credit_card_number), "{}", f.credit_card_number);

            let routing: Vec<u32> = f
                .routing_number
                .bytes()
                .map(|b| u32::from(b - b'0'))
                .collect();
            let weighted: u32 = routing
                .iter()
                .zip([3, 7, 1].iter().cycle())
                .map(|(d, w)| d * w)
                .sum();
            assert_eq!(weighted % 10, 0, "{}", f.routing_number);

            // Move country and check digits to the end; result must be 1 mod 97.
            let rearranged = format!("{}1314{}", &f.iban[4..], &f.iban[2..4]);
            assert_eq!(mod97(&rearranged), 1, "{}", f.iban);

            assert_eq!(f.credit_card_cvv.len(), 3);
            assert_eq!(f.bic.len(), 8);
            assert!(f.bitcoin.starts_with('1') || f.bitcoin.starts_with('3'));
        }
    }

    #[test]
    fn internet_addresses_parse() {
        let mut rng = rng();
        for _ in 0..20 {
            let i = internet(&mut rng);
            assert!(i.ip.parse::<Ipv4Addr>().is_ok());
            assert!(i.ipv6.parse::<Ipv6Addr>().is_ok());
            assert_eq!(i.mac.split(':').count(), 6);
            assert_eq!(i.color.len(), 7);
            assert!(i.url.starts_with("https://"));
            assert_eq!(i.password.len(), 15);
        }
    }

    #[test]
    fn isbn_check_digit_is_valid() {
        let mut rng = rng();
        for _ in 0..50 {
            let isbn = isbn(&mut rng);
            let digits: Vec<u32> = isbn.chars().filter_map(|c| c.to_digit(10)).collect();
            assert_eq!(digits.len(), 13);
            let sum: u32 = digits
                .iter()
                .enumerate()
                .map(|(i, d)| d * if i % 2 == 0 { 1 } else { 3 })
                .sum();
            assert_eq!(sum % 10, 0, "{isbn}");
        }
    }

    #[test]
    fn sentences_are_capitalised_and_terminated() {
        let mut rng = rng();
        let s = sentence(&mut rng);
        assert!(s.ends_with('.'));
        assert!(s.chars().next().unwrap().is_uppercase());
        assert!(paragraph(&mut rng).matches('.').count() >= 3);
    }

    #[test]
    fn uuid_is_version_four() {
        let id = uuid(&mut rng());
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn record_keys_are_camel_case() {
        let value = serde_json::to_value(finance(&mut rng())).unwrap();
        assert!(value.get("creditCardCVV").is_some());
        assert!(value.get("transactionType").is_some());
    }
}
