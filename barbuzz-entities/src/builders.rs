pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::establishment_builder::*;

pub mod establishment_builder {

    use super::*;
    use crate::{
        classification::*, establishment::*, geo::*, id::*, opening_hours::*, time::*,
    };

    #[derive(Debug)]
    pub struct EstablishmentBuild {
        establishment: Establishment,
    }

    impl EstablishmentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.establishment.id = id.into();
            self
        }
        pub fn external_id(mut self, external_id: &str) -> Self {
            self.establishment.external_id = Some(external_id.into());
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.establishment.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.establishment.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn classification(mut self, classification: Classification) -> Self {
            self.establishment.classification = classification;
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.establishment.address = Some(address.into());
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.establishment.description = Some(description.into());
            self
        }
        pub fn price_level(mut self, price_level: u8) -> Self {
            self.establishment.price_level = Some(PriceLevel::try_from(i64::from(price_level)).unwrap());
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.establishment.rating = Some(RatingValue::try_from(rating).unwrap());
            self
        }
        pub fn opening_hours(mut self, opening_hours: OpeningHours) -> Self {
            self.establishment.opening_hours = Some(opening_hours);
            self
        }
        pub fn photo_reference(mut self, photo_reference: &str) -> Self {
            self.establishment.photo_reference = Some(photo_reference.into());
            self
        }
        pub fn finish(self) -> Establishment {
            self.establishment
        }
    }

    impl Builder for Establishment {
        type Build = EstablishmentBuild;
        fn build() -> EstablishmentBuild {
            let now = Timestamp::now();
            EstablishmentBuild {
                establishment: Establishment {
                    id: Id::new(),
                    external_id: None,
                    name: "".into(),
                    pos: MapPoint::from_lat_lng_deg(30.2672, -97.7431),
                    classification: Classification::bar(),
                    address: None,
                    phone: None,
                    website: None,
                    description: None,
                    price_level: None,
                    rating: None,
                    opening_hours: None,
                    open_now: None,
                    photo_reference: None,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}
