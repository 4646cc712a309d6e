//! Catalogue flavor entity.

use serde::{Deserialize, Serialize};

use super::FlavorName;

/// Descriptive fields of a flavor, everything except its unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorDetails {
    /// URI or path of the flavor's picture.
    pub image: String,
    pub description: String,
    /// Free-form nutrition facts.
    pub nutrition: String,
    /// Price in the smallest currency unit.
    pub price: u32,
    pub availability: bool,
}

/// A product catalogue item.
///
/// Serialises as a flat camelCase object:
/// `{"name","image","description","nutrition","price","availability"}`.
///
/// # Examples
/// ```
/// use scoops_backend::domain::{Flavor, FlavorDetails, FlavorName};
///
/// let flavor = Flavor::new(
///     FlavorName::new("mint").expect("valid name"),
///     FlavorDetails {
///         image: "/img/mint.png".into(),
///         description: "Cool".into(),
///         nutrition: "120 kcal".into(),
///         price: 350,
///         availability: true,
///     },
/// );
/// assert_eq!(flavor.name().as_str(), "mint");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FlavorDto", into = "FlavorDto")]
pub struct Flavor {
    name: FlavorName,
    details: FlavorDetails,
}

impl Flavor {
    pub fn new(name: FlavorName, details: FlavorDetails) -> Self {
        Self { name, details }
    }

    pub fn name(&self) -> &FlavorName {
        &self.name
    }

    pub fn details(&self) -> &FlavorDetails {
        &self.details
    }

    pub fn price(&self) -> u32 {
        self.details.price
    }

    pub fn is_available(&self) -> bool {
        self.details.availability
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct FlavorDto {
    name: String,
    image: String,
    description: String,
    nutrition: String,
    price: u32,
    availability: bool,
}

impl From<Flavor> for FlavorDto {
    fn from(value: Flavor) -> Self {
        let Flavor { name, details } = value;
        let FlavorDetails {
            image,
            description,
            nutrition,
            price,
            availability,
        } = details;
        Self {
            name: name.into(),
            image,
            description,
            nutrition,
            price,
            availability,
        }
    }
}

impl TryFrom<FlavorDto> for Flavor {
    type Error = super::NameValidationError;

    fn try_from(value: FlavorDto) -> Result<Self, Self::Error> {
        let FlavorDto {
            name,
            image,
            description,
            nutrition,
            price,
            availability,
        } = value;
        Ok(Self::new(
            FlavorName::new(name)?,
            FlavorDetails {
                image,
                description,
                nutrition,
                price,
                availability,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn mint() -> Flavor {
        Flavor::new(
            FlavorName::new("mint").expect("valid name"),
            FlavorDetails {
                image: "/img/mint.png".into(),
                description: "Cool and green".into(),
                nutrition: "120 kcal".into(),
                price: 350,
                availability: false,
            },
        )
    }

    #[rstest]
    fn serialises_as_flat_record(mint: Flavor) {
        let value = serde_json::to_value(&mint).expect("flavor serialises");
        assert_eq!(
            value,
            json!({
                "name": "mint",
                "image": "/img/mint.png",
                "description": "Cool and green",
                "nutrition": "120 kcal",
                "price": 350,
                "availability": false,
            })
        );
    }

    #[rstest]
    fn deserialisation_rejects_negative_prices() {
        let payload = json!({
            "name": "mint",
            "image": "",
            "description": "",
            "nutrition": "",
            "price": -1,
            "availability": true,
        });
        assert!(serde_json::from_value::<Flavor>(payload).is_err());
    }

    #[rstest]
    fn accessors_expose_details(mint: Flavor) {
        assert_eq!(mint.price(), 350);
        assert!(!mint.is_available());
        assert_eq!(mint.details().nutrition, "120 kcal");
    }
}
