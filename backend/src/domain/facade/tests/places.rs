//! Place operations.

use chrono::Duration;
use rstest::rstest;
use serde_json::json;

use super::{Harness, harness, new_place};
use crate::domain::{AmenityId, Entity, ErrorCode, NewPlace, PlaceId, PlaceUpdate, UserId};
use crate::test_support::fixture_timestamp;

#[rstest]
fn place_with_known_owner_is_retrievable(harness: Harness) {
    let owner = harness.user("owner@example.com");

    let place = harness.place(&owner);

    assert_eq!(place.owner_id(), owner.id());
    assert_eq!(place.description(), "Two rooms facing the sea");
    assert_eq!(harness.facade.get_place(place.id()), Some(place.clone()));
    assert_eq!(harness.facade.get_all_places(), vec![place]);
}

#[rstest]
fn unknown_owner_is_rejected(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let stranger = UserId::random();
    let input = NewPlace {
        owner_id: stranger,
        ..new_place(&owner)
    };

    let err = harness.facade.create_place(input).expect_err("unknown owner");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), "Invalid owner_id");
    assert_eq!(
        err.details(),
        Some(&json!({
            "field": "owner_id",
            "value": stranger.to_string(),
            "code": "unknown_reference",
        }))
    );
    assert!(harness.facade.get_all_places().is_empty());
}

#[rstest]
fn unknown_amenity_is_rejected(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let wifi = harness.amenity("Wi-Fi");
    let input = NewPlace {
        amenity_ids: vec![*wifi.id(), AmenityId::random()],
        ..new_place(&owner)
    };

    let err = harness.facade.create_place(input).expect_err("unknown amenity");

    assert_eq!(err.message(), "Invalid amenity_id");
}

#[rstest]
fn missing_owner_is_reported_before_field_errors(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let input = NewPlace {
        owner_id: UserId::random(),
        price: -5.0,
        ..new_place(&owner)
    };

    let err = harness.facade.create_place(input).expect_err("two faults");

    assert_eq!(err.message(), "Invalid owner_id");
}

#[rstest]
#[case::price(PlaceUpdate { price: Some(0.0), ..PlaceUpdate::default() }, "Price must be a positive value")]
#[case::latitude(PlaceUpdate { latitude: Some(-95.0), ..PlaceUpdate::default() }, "Latitude must be between -90.0 and 90.0")]
#[case::longitude(PlaceUpdate { longitude: Some(181.0), ..PlaceUpdate::default() }, "Longitude must be between -180.0 and 180.0")]
#[case::title(PlaceUpdate { title: Some(String::new()), ..PlaceUpdate::default() }, "Title is required")]
fn invalid_place_updates_are_rejected_without_change(
    harness: Harness,
    #[case] update: PlaceUpdate,
    #[case] message: &str,
) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner);
    harness.clock.advance(Duration::hours(2));

    let err = harness
        .facade
        .update_place(place.id(), &update)
        .expect_err("invalid update");

    assert_eq!(err.message(), message);
    assert_eq!(harness.facade.get_place(place.id()), Some(place));
}

#[rstest]
fn valid_place_update_is_committed(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner);
    harness.clock.advance(Duration::hours(2));
    let update = PlaceUpdate {
        title: Some("Harbour loft, renovated".to_owned()),
        price: Some(180.0),
        ..PlaceUpdate::default()
    };

    let updated = harness
        .facade
        .update_place(place.id(), &update)
        .expect("valid update")
        .expect("place exists");

    assert_eq!(updated.title(), "Harbour loft, renovated");
    assert_eq!(updated.owner_id(), owner.id());
    assert_eq!(updated.updated_at(), fixture_timestamp() + Duration::hours(2));
    assert!(
        harness
            .facade
            .update_place(&PlaceId::random(), &update)
            .expect("absence is not an error")
            .is_none()
    );
}

#[rstest]
fn amenities_link_once(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner);
    let wifi = harness.amenity("Wi-Fi");
    harness.clock.advance(Duration::minutes(3));

    let linked = harness
        .facade
        .add_place_amenity(place.id(), wifi.id())
        .expect("amenity exists")
        .expect("place exists");
    harness.clock.advance(Duration::minutes(3));
    let relinked = harness
        .facade
        .add_place_amenity(place.id(), wifi.id())
        .expect("amenity exists")
        .expect("place exists");

    assert_eq!(linked.amenity_ids(), &[*wifi.id()]);
    assert_eq!(relinked, linked);
    assert_eq!(linked.updated_at(), fixture_timestamp() + Duration::minutes(3));
}

#[rstest]
fn linking_reports_missing_amenity_and_place(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner);
    let wifi = harness.amenity("Wi-Fi");

    let err = harness
        .facade
        .add_place_amenity(place.id(), &AmenityId::random())
        .expect_err("missing amenity");
    let absent = harness
        .facade
        .add_place_amenity(&PlaceId::random(), wifi.id())
        .expect("amenity exists");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "Amenity not found");
    assert!(absent.is_none());
}

#[rstest]
fn details_resolve_owner_amenities_and_reviews(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let guest = harness.user("guest@example.com");
    let wifi = harness.amenity("Wi-Fi");
    let pool = harness.amenity("Pool");
    let place = harness
        .facade
        .create_place(NewPlace {
            amenity_ids: vec![*pool.id(), *wifi.id()],
            ..new_place(&owner)
        })
        .expect("valid place");
    let review = harness.review(&place, &guest, 4);

    let details = harness
        .facade
        .get_place_details(place.id())
        .expect("place exists");

    assert_eq!(details.owner, Some(owner));
    assert_eq!(details.amenities, vec![pool, wifi]);
    assert_eq!(details.reviews, vec![review]);
    assert!(harness.facade.get_place_details(&PlaceId::random()).is_none());
}

#[rstest]
fn empty_update_keeps_updated_at(harness: Harness) {
    let owner = harness.user("owner@example.com");
    let place = harness.place(&owner);
    harness.clock.advance(Duration::hours(1));

    let updated = harness
        .facade
        .update_place(place.id(), &PlaceUpdate::default())
        .expect("empty update is valid")
        .expect("place exists");

    assert_eq!(updated.updated_at(), fixture_timestamp());
}
