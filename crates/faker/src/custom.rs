//! Single-value generators behind `generate_custom`.

use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use crate::data::{ANIMAL_TYPES, COLORS, COUNTRIES, FIRST_NAMES, LAST_NAMES, VEHICLES};
use crate::generators::{self as g, pick};

/// The `type` tags accepted by `generate_custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomKind {
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    Address,
    City,
    Country,
    Company,
    JobTitle,
    ProductName,
    Price,
    Color,
    Animal,
    Vehicle,
    Isbn,
    Uuid,
    Password,
    Url,
    Username,
    Avatar,
    Date,
    Word,
    Sentence,
    Paragraph,
}

impl CustomKind {
    pub const ALL: [CustomKind; 25] = [
        Self::FirstName,
        Self::LastName,
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::City,
        Self::Country,
        Self::Company,
        Self::JobTitle,
        Self::ProductName,
        Self::Price,
        Self::Color,
        Self::Animal,
        Self::Vehicle,
        Self::Isbn,
        Self::Uuid,
        Self::Password,
        Self::Url,
        Self::Username,
        Self::Avatar,
        Self::Date,
        Self::Word,
        Self::Sentence,
        Self::Paragraph,
    ];

    /// The wire tag, as it appears in the tool schema.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::Country => "country",
            Self::Company => "company",
            Self::JobTitle => "jobTitle",
            Self::ProductName => "productName",
            Self::Price => "price",
            Self::Color => "color",
            Self::Animal => "animal",
            Self::Vehicle => "vehicle",
            Self::Isbn => "isbn",
            Self::Uuid => "uuid",
            Self::Password => "password",
            Self::Url => "url",
            Self::Username => "username",
            Self::Avatar => "avatar",
            Self::Date => "date",
            Self::Word => "word",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
        }
    }

    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> Value {
        let text = match self {
            Self::FirstName => pick(rng, FIRST_NAMES).to_string(),
            Self::LastName => pick(rng, LAST_NAMES).to_string(),
            Self::FullName => g::full_name(rng),
            Self::Email => g::email(rng),
            Self::Phone => g::phone_number(rng),
            Self::Address => g::street_address(rng),
            Self::City => g::city(rng),
            Self::Country => pick(rng, COUNTRIES).to_string(),
            Self::Company => g::company_name(rng),
            Self::JobTitle => g::job_title(rng),
            Self::ProductName => g::product_name(rng),
            Self::Price => g::price(rng),
            Self::Color => pick(rng, COLORS).to_string(),
            Self::Animal => pick(rng, ANIMAL_TYPES).to_string(),
            Self::Vehicle => pick(rng, VEHICLES).to_string(),
            Self::Isbn => g::isbn(rng),
            Self::Uuid => g::uuid(rng),
            Self::Password => g::password(rng),
            Self::Url => g::url(rng),
            Self::Username => g::username(rng),
            Self::Avatar => g::avatar(rng),
            Self::Date => g::recent(rng),
            Self::Word => g::word(rng),
            Self::Sentence => g::sentence(rng),
            Self::Paragraph => g::paragraph(rng),
        };
        Value::String(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tags_round_trip_through_serde() {
        for kind in CustomKind::ALL {
            let parsed: CustomKind = serde_json::from_value(Value::from(kind.as_str())).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn every_kind_yields_a_non_empty_string() {
        let mut rng = StdRng::seed_from_u64(11);
        for kind in CustomKind::ALL {
            let value = kind.generate(&mut rng);
            let text = value.as_str().unwrap();
            assert!(!text.is_empty(), "{}", kind.as_str());
        }
    }

    #[test]
    fn scalars_have_the_declared_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let email = CustomKind::Email.generate(&mut rng);
            assert!(email.as_str().unwrap().contains('@'));

            let id = CustomKind::Uuid.generate(&mut rng);
            assert!(uuid::Uuid::parse_str(id.as_str().unwrap()).is_ok());

            let date = CustomKind::Date.generate(&mut rng);
            assert!(chrono::DateTime::parse_from_rfc3339(date.as_str().unwrap()).is_ok());

            let price = CustomKind::Price.generate(&mut rng);
            assert!(price.as_str().unwrap().parse::<f64>().is_ok());
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(serde_json::from_value::<CustomKind>(Value::from("spaceship")).is_err());
        assert!(serde_json::from_value::<CustomKind>(Value::from("Email")).is_err());
    }
}
