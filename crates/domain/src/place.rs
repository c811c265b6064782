//! Place: a rental listing located in a [`City`](crate::city::City) and
//! owned by a [`User`](crate::user::User).

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::error::ValidationError;
use crate::id::{CityId, PlaceId, UserId};
use crate::kind::Kind;
use crate::payload::Payload;
use crate::record::{Child, Creatable, Patchable, Record, Reference};
use crate::time::Timestamps;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    #[serde(flatten)]
    pub timestamps: Timestamps,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub number_rooms: i64,
    pub number_bathrooms: i64,
    pub max_guest: i64,
    pub price_by_night: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub amenity_ids: Vec<String>,
}

impl Place {
    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder(city_id: CityId, user_id: UserId) -> PlaceBuilder {
        PlaceBuilder {
            city_id,
            user_id,
            name: String::new(),
            description: String::new(),
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: 0.0,
            longitude: 0.0,
            amenity_ids: Vec::new(),
        }
    }
}

/// Step-by-step builder for [`Place`]. Unset attributes keep their zero value.
#[derive(Debug)]
pub struct PlaceBuilder {
    city_id: CityId,
    user_id: UserId,
    name: String,
    description: String,
    number_rooms: i64,
    number_bathrooms: i64,
    max_guest: i64,
    price_by_night: i64,
    latitude: f64,
    longitude: f64,
    amenity_ids: Vec<String>,
}

impl PlaceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn number_rooms(mut self, value: i64) -> Self {
        self.number_rooms = value;
        self
    }

    #[must_use]
    pub fn number_bathrooms(mut self, value: i64) -> Self {
        self.number_bathrooms = value;
        self
    }

    #[must_use]
    pub fn max_guest(mut self, value: i64) -> Self {
        self.max_guest = value;
        self
    }

    #[must_use]
    pub fn price_by_night(mut self, value: i64) -> Self {
        self.price_by_night = value;
        self
    }

    #[must_use]
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    #[must_use]
    pub fn amenity_ids(mut self, ids: Vec<String>) -> Self {
        self.amenity_ids = ids;
        self
    }

    /// Consume the builder and return a [`Place`] with a fresh id.
    #[must_use]
    pub fn build(self) -> Place {
        Place {
            id: PlaceId::new(),
            timestamps: Timestamps::default(),
            city_id: self.city_id,
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            number_rooms: self.number_rooms,
            number_bathrooms: self.number_bathrooms,
            max_guest: self.max_guest,
            price_by_night: self.price_by_night,
            latitude: self.latitude,
            longitude: self.longitude,
            amenity_ids: self.amenity_ids,
        }
    }
}

/// Mutable attributes read from a payload, all validated before any is applied.
struct Attributes {
    name: Option<String>,
    description: Option<String>,
    number_rooms: Option<i64>,
    number_bathrooms: Option<i64>,
    max_guest: Option<i64>,
    price_by_night: Option<i64>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    amenity_ids: Option<Vec<String>>,
}

impl Attributes {
    fn read(payload: &Payload) -> Result<Self, ValidationError> {
        Ok(Self {
            name: payload.string("name")?,
            description: payload.string("description")?,
            number_rooms: payload.integer("number_rooms")?,
            number_bathrooms: payload.integer("number_bathrooms")?,
            max_guest: payload.integer("max_guest")?,
            price_by_night: payload.integer("price_by_night")?,
            latitude: payload.number("latitude")?,
            longitude: payload.number("longitude")?,
            amenity_ids: payload.strings("amenity_ids")?,
        })
    }

    fn apply(self, place: &mut Place) {
        if let Some(v) = self.name {
            place.name = v;
        }
        if let Some(v) = self.description {
            place.description = v;
        }
        if let Some(v) = self.number_rooms {
            place.number_rooms = v;
        }
        if let Some(v) = self.number_bathrooms {
            place.number_bathrooms = v;
        }
        if let Some(v) = self.max_guest {
            place.max_guest = v;
        }
        if let Some(v) = self.price_by_night {
            place.price_by_night = v;
        }
        if let Some(v) = self.latitude {
            place.latitude = v;
        }
        if let Some(v) = self.longitude {
            place.longitude = v;
        }
        if let Some(v) = self.amenity_ids {
            place.amenity_ids = v;
        }
    }
}

impl Record for Place {
    type Id = PlaceId;

    const KIND: Kind = Kind::Place;

    fn id(&self) -> PlaceId {
        self.id
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

impl Creatable for Place {
    type Scope = CityId;

    const REQUIRED: &'static [&'static str] = &["user_id", "name"];

    // The city from the path is not checked.
    fn references(_city_id: &CityId, payload: &Payload) -> Vec<Reference> {
        payload
            .reference("user_id")
            .map(|id| Reference::new(Kind::User, id))
            .into_iter()
            .collect()
    }

    fn create(city_id: CityId, payload: &Payload) -> Result<Self, ValidationError> {
        let user_id = payload
            .reference("user_id")
            .and_then(|text| text.parse::<UserId>().ok())
            .ok_or(ValidationError::Invalid("user_id"))?;
        let attributes = Attributes::read(payload)?;

        let mut place = Place::builder(city_id, user_id).build();
        attributes.apply(&mut place);
        Ok(place)
    }
}

impl Patchable for Place {
    const PROTECTED: &'static [&'static str] = &[
        "id",
        "created_at",
        "updated_at",
        "user_id",
        "city_id",
    ];

    fn patch(&mut self, payload: &Payload) -> Result<(), ValidationError> {
        Attributes::read(payload)?.apply(self);
        Ok(())
    }
}

impl Child<City> for Place {
    fn parent_id(&self) -> CityId {
        self.city_id
    }
}
