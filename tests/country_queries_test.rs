use small_atlas::{Country, MAX_CITIES};

fn sample_country() -> Country {
    let mut country = Country::new("Atlantis");
    country.add_city("Alpha", 0.0, 0.0, 1.0, 1.0, 10, 2);
    country.add_city("Beta", 10.0, 5.0, 9.0, 4.0, 20, 3);
    country.add_city("Gamma", -5.0, -5.0, -4.0, -4.0, 30, 1);
    country
}

#[test]
fn test_num_of_residents_sums_all_cities() {
    let country = sample_country();
    assert_eq!(country.num_of_residents(), 60);
    assert_eq!(Country::new("Empty").num_of_residents(), 0);
}

#[test]
fn test_capacity_limit_rejects_overflow() {
    let mut country = Country::new("Crowded");
    for i in 0..MAX_CITIES {
        assert!(country.add_city(format!("City{i}"), 0.0, 0.0, 0.0, 0.0, 1, 1));
    }
    assert!(!country.add_city("OneTooMany", 0.0, 0.0, 0.0, 0.0, 1, 1));
    assert_eq!(country.len(), MAX_CITIES);
    assert_eq!(country.num_of_residents(), MAX_CITIES as u64);
}

#[test]
fn test_longest_distance_collinear_cities() {
    let mut country = Country::new("Line");
    country.add_city("A", 0.0, 0.0, 0.0, 0.0, 1, 1);
    country.add_city("B", 5.0, 0.0, 0.0, 0.0, 1, 1);
    country.add_city("C", 10.0, 0.0, 0.0, 0.0, 1, 1);
    assert_eq!(country.longest_distance(), 10.0);
}

#[test]
fn test_longest_distance_needs_two_cities() {
    let mut country = Country::new("Tiny");
    assert_eq!(country.longest_distance(), 0.0);
    country.add_city("Solo", 3.0, 4.0, 0.0, 0.0, 1, 1);
    assert_eq!(country.longest_distance(), 0.0);
}

#[test]
fn test_cities_north_of_unknown_reference() {
    let country = sample_country();
    assert_eq!(
        country.cities_north_of("Nowhere"),
        "There is no city with the name Nowhere"
    );
}

#[test]
fn test_cities_north_of_none_found() {
    let country = sample_country();
    // Beta has the northernmost center, nothing lies above it
    assert_eq!(
        country.cities_north_of("Beta"),
        "There are no cities north of Beta"
    );
}

#[test]
fn test_cities_north_of_lists_matches_from_both_ends() {
    let mut country = Country::new("Atlantis");
    country.add_city("Ref", 0.0, 0.0, 0.0, 0.0, 1, 1);
    country.add_city("North1", 1.0, 3.0, 1.0, 3.0, 1, 1);
    country.add_city("South", 1.0, -3.0, 1.0, -3.0, 1, 1);
    country.add_city("North2", 2.0, 7.0, 2.0, 7.0, 1, 1);

    let listing = country.cities_north_of("Ref");
    assert!(listing.starts_with("The cities north of Ref are:\n\n"));
    // two-pointer order: ends first, so North2 (rightmost) precedes North1
    let north2_at = listing.find("City Name: North2").unwrap();
    let north1_at = listing.find("City Name: North1").unwrap();
    assert!(north2_at < north1_at);
    assert!(!listing.contains("City Name: South\n"));
    assert!(!listing.contains("City Name: Ref\n"));
}

#[test]
fn test_cities_north_of_skips_reference_city() {
    let mut country = Country::new("Atlantis");
    country.add_city("Low", 0.0, 0.0, 0.0, 0.0, 1, 1);
    country.add_city("High", 0.0, 9.0, 0.0, 9.0, 1, 1);
    let listing = country.cities_north_of("Low");
    assert_eq!(listing.matches("City Name:").count(), 1);
    assert!(listing.contains("City Name: High"));
}

#[test]
fn test_southernmost_city() {
    assert!(Country::new("Empty").southernmost_city().is_none());

    let mut single = Country::new("Single");
    single.add_city("Only", 4.0, 4.0, 0.0, 0.0, 1, 1);
    assert_eq!(single.southernmost_city().unwrap().name(), "Only");

    let country = sample_country();
    assert_eq!(country.southernmost_city().unwrap().name(), "Gamma");
}

#[test]
fn test_country_display_lists_cities_in_order() {
    let mut country = Country::new("Atlantis");
    country.add_city("Alpha", 0.0, 0.0, 1.0, 1.0, 10, 2);
    country.add_city("Beta", 10.0, 5.0, 9.0, 4.0, 20, 3);

    let rendered = country.to_string();
    let expected = "Cities of Atlantis:\n\n\
                    City Name: Alpha\n\
                    City Center: (0,0)\n\
                    Central Station: (1,1)\n\
                    Number of Residents: 10\n\
                    Number of Neighborhoods: 2\n\
                    \n\
                    City Name: Beta\n\
                    City Center: (10,5)\n\
                    Central Station: (9,4)\n\
                    Number of Residents: 20\n\
                    Number of Neighborhoods: 3\n";
    assert_eq!(rendered, expected);
}
