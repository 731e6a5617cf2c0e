//! Tests for place validation and link bookkeeping.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 10, 8, 30, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn valid_input() -> NewPlace {
    NewPlace {
        title: "Cosy flat".to_owned(),
        description: None,
        price: 85.0,
        latitude: 48.8566,
        longitude: 2.3522,
        owner_id: UserId::random(),
        amenity_ids: Vec::new(),
    }
}

#[rstest]
fn valid_place_defaults_description_and_links(valid_input: NewPlace, now: DateTime<Utc>) {
    let owner_id = valid_input.owner_id;
    let place = Place::try_new(valid_input, now).expect("valid place");

    assert_eq!(place.title(), "Cosy flat");
    assert_eq!(place.description(), "");
    assert_eq!(place.owner_id(), &owner_id);
    assert!(place.amenity_ids().is_empty());
    assert!(place.review_ids().is_empty());
    assert_eq!(place.created_at(), now);
}

#[rstest]
#[case::lat_south(-90.0, 0.0)]
#[case::lat_north(90.0, 0.0)]
#[case::lon_west(0.0, -180.0)]
#[case::lon_east(0.0, 180.0)]
fn coordinate_bounds_are_inclusive(
    valid_input: NewPlace,
    now: DateTime<Utc>,
    #[case] latitude: f64,
    #[case] longitude: f64,
) {
    let input = NewPlace {
        latitude,
        longitude,
        ..valid_input
    };
    assert!(Place::try_new(input, now).is_ok());
}

#[rstest]
#[case::zero_price(0.0, 0.0, 0.0, PlaceValidationError::NonPositivePrice)]
#[case::negative_price(-1.0, 0.0, 0.0, PlaceValidationError::NonPositivePrice)]
#[case::nan_price(f64::NAN, 0.0, 0.0, PlaceValidationError::NonPositivePrice)]
#[case::lat_low(10.0, -90.5, 0.0, PlaceValidationError::LatitudeOutOfRange)]
#[case::lat_high(10.0, 91.0, 0.0, PlaceValidationError::LatitudeOutOfRange)]
#[case::lon_low(10.0, 0.0, -180.1, PlaceValidationError::LongitudeOutOfRange)]
#[case::lon_high(10.0, 0.0, 200.0, PlaceValidationError::LongitudeOutOfRange)]
fn out_of_range_numbers_are_rejected(
    valid_input: NewPlace,
    now: DateTime<Utc>,
    #[case] price: f64,
    #[case] latitude: f64,
    #[case] longitude: f64,
    #[case] expected: PlaceValidationError,
) {
    let input = NewPlace {
        price,
        latitude,
        longitude,
        ..valid_input
    };
    let err = Place::try_new(input, now).expect_err("invalid place");
    assert_eq!(err, expected);
}

#[rstest]
fn titles_are_required_and_bounded(valid_input: NewPlace, now: DateTime<Utc>) {
    let blank = NewPlace {
        title: "   ".to_owned(),
        ..valid_input.clone()
    };
    let long = NewPlace {
        title: "t".repeat(TITLE_MAX + 1),
        ..valid_input
    };

    let blank_err = Place::try_new(blank, now).expect_err("blank title");
    let long_err = Place::try_new(long, now).expect_err("long title");

    assert_eq!(blank_err, PlaceValidationError::EmptyTitle);
    assert_eq!(blank_err.field(), "title");
    assert_eq!(
        long_err.to_string(),
        "Title must not exceed 100 characters"
    );
}

#[rstest]
fn repeated_amenities_collapse_on_construction(valid_input: NewPlace, now: DateTime<Utc>) {
    let wifi = AmenityId::random();
    let pool = AmenityId::random();
    let input = NewPlace {
        amenity_ids: vec![wifi, pool, wifi],
        ..valid_input
    };

    let place = Place::try_new(input, now).expect("valid place");

    assert_eq!(place.amenity_ids(), &[wifi, pool]);
}

#[rstest]
fn review_links_are_unique_and_removable(valid_input: NewPlace, now: DateTime<Utc>) {
    let mut place = Place::try_new(valid_input, now).expect("valid place");
    let first = ReviewId::random();
    let second = ReviewId::random();

    assert!(place.add_review(first));
    assert!(place.add_review(second));
    assert!(!place.add_review(first));
    assert_eq!(place.review_ids(), &[first, second]);

    assert!(place.remove_review(&first));
    assert!(!place.remove_review(&first));
    assert_eq!(place.review_ids(), &[second]);
}

#[rstest]
fn update_changes_scalars_but_not_links(valid_input: NewPlace, now: DateTime<Utc>) {
    let wifi = AmenityId::random();
    let input = NewPlace {
        amenity_ids: vec![wifi],
        ..valid_input
    };
    let place = Place::try_new(input, now).expect("valid place");
    let later = now + chrono::Duration::hours(1);
    let update = PlaceUpdate {
        description: Some("Near the river".to_owned()),
        price: Some(120.5),
        ..PlaceUpdate::default()
    };

    let updated = place.with_update(&update, later).expect("valid update");

    assert_eq!(updated.title(), "Cosy flat");
    assert_eq!(updated.description(), "Near the river");
    assert!((updated.price() - 120.5).abs() < f64::EPSILON);
    assert_eq!(updated.amenity_ids(), &[wifi]);
    assert_eq!(updated.updated_at(), later);
    assert_eq!(updated.created_at(), now);
}

#[rstest]
fn invalid_update_is_rejected_without_side_effects(valid_input: NewPlace, now: DateTime<Utc>) {
    let place = Place::try_new(valid_input, now).expect("valid place");
    let update = PlaceUpdate {
        title: Some("Renamed".to_owned()),
        latitude: Some(123.0),
        ..PlaceUpdate::default()
    };

    let err = place
        .with_update(&update, now + chrono::Duration::hours(1))
        .expect_err("latitude out of range");

    assert_eq!(err, PlaceValidationError::LatitudeOutOfRange);
    assert_eq!(place.title(), "Cosy flat");
    assert_eq!(place.updated_at(), now);
}
