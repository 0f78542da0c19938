use ohm_domain::color::{ColorCode, STANDARD_COLORS};
use ohm_domain::roles::BandRoles;

#[test]
fn standard_table_has_unique_names() {
    let mut names: Vec<&str> = STANDARD_COLORS.iter().map(|c| c.name.as_ref()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), STANDARD_COLORS.len());
}

#[test]
fn digits_cover_zero_to_nine_once() {
    let mut digits: Vec<u8> = STANDARD_COLORS.iter().filter_map(|c| c.digit).collect();
    digits.sort_unstable();
    assert_eq!(digits, (0..=9).collect::<Vec<u8>>());
}

#[test]
fn roles_follow_optional_columns() {
    let gold = ColorCode::new("gold", None, -1, Some(5.0));
    assert_eq!(gold.roles(), BandRoles::EXPONENT | BandRoles::TOLERANCE);

    let black = ColorCode::new("black", Some(0), 0, None);
    assert_eq!(black.roles(), BandRoles::DIGIT | BandRoles::EXPONENT);

    let pink = ColorCode::new("pink", None, -3, None);
    assert_eq!(pink.roles(), BandRoles::EXPONENT);
}

#[test]
fn roles_serialize_as_names() {
    let roles = BandRoles::DIGIT | BandRoles::EXPONENT | BandRoles::TOLERANCE;
    let json = serde_json::to_value(roles).expect("serialize roles");
    assert_eq!(json, serde_json::json!(["digit", "exponent", "tolerance"]));
}

#[test]
fn roles_deserialize_from_names() {
    let roles: BandRoles = serde_json::from_str(r#"["tolerance", "digit"]"#).expect("roles");
    assert_eq!(roles, BandRoles::DIGIT | BandRoles::TOLERANCE);

    assert!(serde_json::from_str::<BandRoles>(r#"["colour"]"#).is_err());
}
