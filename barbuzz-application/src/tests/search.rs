use super::prelude::*;
use usecases::{NearbyQuery, TextQuery, DEFAULT_RESULT_LIMIT, DEFAULT_SEARCH_RADIUS_METERS};

fn default_query() -> NearbyQuery {
    NearbyQuery::new(
        austin(),
        Distance::from_meters(f64::from(DEFAULT_SEARCH_RADIUS_METERS)),
        DEFAULT_RESULT_LIMIT,
    )
}

fn always_open() -> OpeningHours {
    vec![OpeningPeriod {
        open: DayTime {
            day: Weekday::Sunday,
            time: "0000".parse().unwrap(),
        },
        close: None,
    }]
    .into()
}

fn text_query(text: &str) -> TextQuery {
    TextQuery {
        text: text.into(),
        limit: DEFAULT_RESULT_LIMIT,
        filter: Default::default(),
    }
}

#[test]
fn nearest_bars_first_without_restaurants() {
    let fixture = BackendFixture::new();
    let b = fixture.create_establishment(
        Establishment::build()
            .name("B")
            .pos(north_of_austin(1.1))
            .finish(),
    );
    let a = fixture.create_establishment(
        Establishment::build()
            .name("A")
            .pos(north_of_austin(0.3))
            .classification(Classification::nightclub())
            .finish(),
    );
    fixture.create_establishment(
        Establishment::build()
            .name("C")
            .pos(north_of_austin(0.1))
            .classification(Classification::restaurant())
            .finish(),
    );

    let results = flows::find_nearby_bars(
        &fixture.db_connections,
        &DegreeApproximation,
        None,
        &default_query(),
    )
    .unwrap();
    let ids: Vec<_> = results.iter().map(|r| &r.establishment.id).collect();
    assert_eq!(vec![&a.id, &b.id], ids);
    assert!((results[0].distance.to_miles() - 0.3).abs() < 0.01);
    assert!((results[1].distance.to_miles() - 1.1).abs() < 0.01);
}

#[test]
fn reject_missing_location() {
    let fixture = BackendFixture::new();
    let query = NearbyQuery::new(
        MapPoint::from_lat_lng_deg(0.0, 0.0),
        Distance::from_meters(5000.0),
        12,
    );
    let err = flows::find_nearby_bars(&fixture.db_connections, &DegreeApproximation, None, &query)
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::MissingLocation))
    ));
}

#[test]
fn degrade_to_empty_results_on_store_faults() {
    // No migrations, no tables
    let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
    let results =
        flows::find_nearby_bars(&db_connections, &DegreeApproximation, None, &default_query())
            .unwrap();
    assert!(results.is_empty());
    let results = flows::find_bars_by_text(&db_connections, None, &text_query("bar")).unwrap();
    assert!(results.is_empty());
}

#[test]
fn complete_missing_details_without_reordering() {
    let fixture = BackendFixture::new();
    let near = fixture.create_establishment(
        Establishment::build()
            .name("Near")
            .pos(north_of_austin(0.2))
            .external_id("place-near")
            .finish(),
    );
    let far = fixture.create_establishment(
        Establishment::build()
            .name("Far")
            .pos(north_of_austin(0.8))
            .external_id("place-far")
            .photo_reference("existing-photo")
            .opening_hours(always_open())
            .finish(),
    );
    let places = DummyPlacesGW::with_photo("place-near", "new-photo");

    let results = flows::find_nearby_bars(
        &fixture.db_connections,
        &DegreeApproximation,
        Some(&places),
        &default_query(),
    )
    .unwrap();
    assert_eq!(2, results.len());
    assert_eq!(near.id, results[0].establishment.id);
    assert_eq!(far.id, results[1].establishment.id);
    assert_eq!(
        Some("new-photo"),
        results[0].establishment.photo_reference.as_deref()
    );
    assert_eq!(
        Some("existing-photo"),
        results[1].establishment.photo_reference.as_deref()
    );
    // Only records with missing details are requested
    assert_eq!(1, places.requests.get());

    let stored = fixture.try_get_establishment(near.id.as_str()).unwrap();
    assert_eq!(Some("new-photo"), stored.photo_reference.as_deref());
}

#[test]
fn ignore_failing_places_gateway() {
    let fixture = BackendFixture::new();
    let bar = fixture.create_establishment(
        Establishment::build()
            .name("Bar")
            .external_id("place-1")
            .finish(),
    );
    let places = DummyPlacesGW {
        unavailable: true,
        ..Default::default()
    };
    let results = flows::find_nearby_bars(
        &fixture.db_connections,
        &DegreeApproximation,
        Some(&places),
        &default_query(),
    )
    .unwrap();
    assert_eq!(1, results.len());
    assert_eq!(bar, results[0].establishment);
    assert_eq!(1, places.requests.get());
}

#[test]
fn search_bars_by_text() {
    let fixture = BackendFixture::new();
    let bar = fixture.create_establishment(
        Establishment::build()
            .name("The White Horse")
            .address("500 Comal St")
            .finish(),
    );
    fixture.create_establishment(
        Establishment::build()
            .name("Comal Kitchen")
            .classification(Classification::restaurant())
            .finish(),
    );
    let results =
        flows::find_bars_by_text(&fixture.db_connections, None, &text_query("comal")).unwrap();
    assert_eq!(vec![bar], results);

    let err = flows::find_bars_by_text(&fixture.db_connections, None, &text_query("  "))
        .unwrap_err();
    assert!(err.is_parameter_error());
}
