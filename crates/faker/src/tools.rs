//! The tool catalog: names, schemas and dispatch.

use std::sync::Arc;

use rand::Rng;
use rmcp::model::{JsonObject, Tool};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::args::{self, Count, CountArgs, CustomArgs};
use crate::custom::CustomKind;
use crate::error::{Error, Result};
use crate::generators;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Person,
    Address,
    Company,
    Product,
    Finance,
    Internet,
    Custom,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        Self::Person,
        Self::Address,
        Self::Company,
        Self::Product,
        Self::Finance,
        Self::Internet,
        Self::Custom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Person => "generate_person",
            Self::Address => "generate_address",
            Self::Company => "generate_company",
            Self::Product => "generate_product",
            Self::Finance => "generate_finance",
            Self::Internet => "generate_internet",
            Self::Custom => "generate_custom",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Person => {
                "Generate fake person data including name, email, phone, job, avatar, etc."
            }
            Self::Address => {
                "Generate fake address data including street, city, country, coordinates, etc."
            }
            Self::Company => {
                "Generate fake company data including name, industry, website, contact info, etc."
            }
            Self::Product => {
                "Generate fake product data including name, price, description, SKU, etc."
            }
            Self::Finance => {
                "Generate fake financial data including account numbers, credit cards, transactions, etc."
            }
            Self::Internet => {
                "Generate fake internet data including emails, URLs, IPs, usernames, etc."
            }
            Self::Custom => "Generate custom fake data of a specific type",
        }
    }

    fn count_description(self) -> &'static str {
        match self {
            Self::Person => "Number of people to generate",
            Self::Address => "Number of addresses to generate",
            Self::Company => "Number of companies to generate",
            Self::Product => "Number of products to generate",
            Self::Finance => "Number of financial records to generate",
            Self::Internet => "Number of internet records to generate",
            Self::Custom => "Number of items to generate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// JSON Schema for the tool's arguments.
    pub fn input_schema(self) -> JsonObject {
        let mut properties = Map::new();
        if self == Self::Custom {
            let tags: Vec<&str> = CustomKind::ALL.iter().map(|k| k.as_str()).collect();
            properties.insert(
                "type".into(),
                json!({
                    "type": "string",
                    "enum": tags,
                    "description": "Type of fake data to generate",
                }),
            );
        }
        properties.insert(
            "count".into(),
            json!({
                "type": "integer",
                "minimum": Count::MIN,
                "maximum": Count::MAX,
                "default": 1,
                "description": self.count_description(),
            }),
        );

        let mut schema = Map::new();
        schema.insert("type".into(), Value::from("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if self == Self::Custom {
            schema.insert("required".into(), json!(["type"]));
        }
        schema
    }

    pub fn descriptor(self) -> Tool {
        Tool::new(self.name(), self.description(), Arc::new(self.input_schema()))
    }

    /// Validate `arguments` and generate the records, as pretty-printed JSON.
    pub fn invoke<R: Rng + ?Sized>(
        self,
        arguments: Option<Map<String, Value>>,
        rng: &mut R,
    ) -> Result<String> {
        match self {
            Self::Person => records(arguments, rng, generators::person),
            Self::Address => records(arguments, rng, generators::address),
            Self::Company => records(arguments, rng, generators::company),
            Self::Product => records(arguments, rng, generators::product),
            Self::Finance => records(arguments, rng, generators::finance),
            Self::Internet => records(arguments, rng, generators::internet),
            Self::Custom => {
                let CustomArgs { kind, count } = args::parse(arguments)?;
                let values: Vec<Value> = (0..count.get()).map(|_| kind.generate(rng)).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
        }
    }
}

/// Descriptors for every tool, in catalog order.
pub fn descriptors() -> Vec<Tool> {
    ToolKind::ALL.into_iter().map(ToolKind::descriptor).collect()
}

/// Look up a tool by name and invoke it.
pub fn call<R: Rng + ?Sized>(
    name: &str,
    arguments: Option<Map<String, Value>>,
    rng: &mut R,
) -> Result<String> {
    let kind = ToolKind::from_name(name).ok_or_else(|| Error::UnknownTool(name.to_string()))?;
    kind.invoke(arguments, rng)
}

fn records<R, T, F>(arguments: Option<Map<String, Value>>, rng: &mut R, generate: F) -> Result<String>
where
    R: Rng + ?Sized,
    T: Serialize,
    F: Fn(&mut R) -> T,
{
    let CountArgs { count } = args::parse(arguments)?;
    let items: Vec<T> = (0..count.get()).map(|_| generate(rng)).collect();
    Ok(serde_json::to_string_pretty(&items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record_fields(kind: ToolKind) -> &'static [&'static str] {
        match kind {
            ToolKind::Person => &[
                "firstName",
                "lastName",
                "fullName",
                "email",
                "phone",
                "dateOfBirth",
                "avatar",
                "bio",
                "jobTitle",
                "gender",
            ],
            ToolKind::Address => &[
                "streetAddress",
                "city",
                "state",
                "country",
                "zipCode",
                "latitude",
                "longitude",
                "timeZone",
            ],
            ToolKind::Company => &[
                "name",
                "industry",
                "description",
                "website",
                "email",
                "phone",
                "employees",
                "founded",
            ],
            ToolKind::Product => &[
                "name",
                "description",
                "price",
                "category",
                "material",
                "color",
                "sku",
                "barcode",
                "weight",
            ],
            ToolKind::Finance => &[
                "accountNumber",
                "routingNumber",
                "creditCardNumber",
                "creditCardCVV",
                "iban",
                "bic",
                "bitcoin",
                "amount",
                "transactionType",
                "currency",
            ],
            ToolKind::Internet => &[
                "email",
                "username",
                "password",
                "url",
                "domain",
                "ip",
                "ipv6",
                "mac",
                "userAgent",
                "color",
            ],
            ToolKind::Custom => &[],
        }
    }

    fn args(value: Value) -> Option<Map<String, Value>> {
        value.as_object().cloned()
    }

    fn invoke(name: &str, arguments: Value) -> Result<Vec<Value>> {
        let mut rng = StdRng::seed_from_u64(42);
        let text = call(name, args(arguments), &mut rng)?;
        Ok(serde_json::from_str(&text).unwrap())
    }

    #[test]
    fn names_resolve_to_kinds() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ToolKind::from_name("generate_spaceship"), None);
    }

    #[test]
    fn record_tools_yield_exact_count_with_declared_fields() {
        for (kind, count) in ToolKind::ALL
            .into_iter()
            .filter(|k| *k != ToolKind::Custom)
            .zip([3, 1, 7, 2, 5, 4])
        {
            let records = invoke(kind.name(), json!({ "count": count })).unwrap();
            assert_eq!(records.len(), count, "{}", kind.name());

            let mut expected: Vec<&str> = record_fields(kind).to_vec();
            expected.sort_unstable();
            for record in &records {
                let mut keys: Vec<&str> =
                    record.as_object().unwrap().keys().map(String::as_str).collect();
                keys.sort_unstable();
                assert_eq!(keys, expected, "{}", kind.name());
            }
        }
    }

    #[test]
    fn every_record_tool_defaults_to_one() {
        for kind in ToolKind::ALL.into_iter().filter(|k| *k != ToolKind::Custom) {
            let records = invoke(kind.name(), json!({})).unwrap();
            assert_eq!(records.len(), 1, "{}", kind.name());
        }
    }

    #[test]
    fn maximum_count_is_accepted() {
        let records = invoke("generate_address", json!({ "count": 100 })).unwrap();
        assert_eq!(records.len(), 100);
    }

    #[test]
    fn out_of_range_count_is_rejected() {
        for count in [0, 101] {
            let err = invoke("generate_company", json!({ "count": count })).unwrap_err();
            assert!(matches!(err, Error::InvalidArguments(_)));
        }
        let err = invoke("generate_finance", json!({ "count": "five" })).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments(_)));
    }

    #[test]
    fn custom_returns_scalars() {
        let values = invoke("generate_custom", json!({ "type": "email", "count": 4 })).unwrap();
        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|v| v.as_str().unwrap().contains('@')));
    }

    #[test]
    fn custom_rejects_unknown_type() {
        let err = invoke("generate_custom", json!({ "type": "spaceship" })).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments(_)));
    }

    #[test]
    fn unknown_tool_is_reported() {
        let err = invoke("generate_spaceship", json!({})).unwrap_err();
        assert!(matches!(err, Error::UnknownTool(name) if name == "generate_spaceship"));
    }

    #[test]
    fn schemas_bound_count() {
        for kind in ToolKind::ALL {
            let schema = kind.input_schema();
            let count = &schema["properties"]["count"];
            assert_eq!(count["type"], "integer");
            assert_eq!(count["minimum"], 1);
            assert_eq!(count["maximum"], 100);
        }
        let custom = ToolKind::Custom.input_schema();
        assert_eq!(
            custom["properties"]["type"]["enum"].as_array().unwrap().len(),
            CustomKind::ALL.len()
        );
        assert_eq!(custom["required"], json!(["type"]));
    }

    #[test]
    fn descriptions_name_the_record_contents() {
        assert!(ToolKind::Person.description().contains("avatar"));
        let schema = ToolKind::Finance.input_schema();
        assert_eq!(
            schema["properties"]["count"]["description"],
            "Number of financial records to generate"
        );
    }

    #[test]
    fn descriptors_cover_catalog() {
        let tools = descriptors();
        assert_eq!(tools.len(), 7);
        assert_eq!(tools[0].name, "generate_person");
    }
}
