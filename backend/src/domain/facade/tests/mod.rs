//! Facade behaviour over real in-memory repositories.

use std::sync::Arc;

use rstest::fixture;

use crate::domain::{
    Amenity, Entity, HbnbFacade, NewAmenity, NewPlace, NewReview, NewUser, Place, Review, User,
};
use crate::test_support::{FixtureClock, fixture_facade};

mod places;

pub(super) struct Harness {
    facade: HbnbFacade,
    clock: Arc<FixtureClock>,
}

#[fixture]
pub(super) fn harness() -> Harness {
    let (facade, clock) = fixture_facade();
    Harness { facade, clock }
}

pub(super) fn new_user(email: &str) -> NewUser {
    NewUser {
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: email.to_owned(),
        is_admin: false,
    }
}

impl Harness {
    fn user(&self, email: &str) -> User {
        self.facade
            .create_user(new_user(email))
            .expect("valid user")
    }

    fn amenity(&self, name: &str) -> Amenity {
        self.facade
            .create_amenity(NewAmenity {
                name: name.to_owned(),
            })
            .expect("valid amenity")
    }

    fn place(&self, owner: &User) -> Place {
        self.facade
            .create_place(new_place(owner))
            .expect("valid place")
    }

    fn review(&self, place: &Place, author: &User, rating: i64) -> Review {
        self.facade
            .create_review(NewReview {
                text: "Great host".to_owned(),
                rating,
                place_id: *place.id(),
                user_id: *author.id(),
            })
            .expect("valid review")
    }
}

pub(super) fn new_place(owner: &User) -> NewPlace {
    NewPlace {
        title: "Harbour loft".to_owned(),
        description: Some("Two rooms facing the sea".to_owned()),
        price: 140.0,
        latitude: 43.2965,
        longitude: 5.3698,
        owner_id: *owner.id(),
        amenity_ids: Vec::new(),
    }
}
