//! Qualifying and trimming names against an origin.

mod common;

use domain_origin::base::name::is_fqdn;
use domain_origin::zonefile::origin::{
    add_origin, trim_domain_name, Origin, APEX,
};
use rstest::rstest;
use std::thread;

//----------- add_origin -----------------------------------------------------

#[rstest]
#[case("foo", "example.com.", "foo.example.com.")]
#[case("foo.", "example.com.", "foo.")]
#[case("@", "example.com.", "example.com.")]
#[case("", "example.com.", "example.com.")]
#[case("foo", ".", "foo.")]
#[case("foo.", ".", "foo.")]
#[case("foo", "example", "foo.example")]
#[case("foo", "", "foo")]
#[case("@", "", "@")]
#[case(r"a\.b", "example.com.", r"a\.b.example.com.")]
fn qualify(
    #[case] name: &str,
    #[case] origin: &str,
    #[case] expected: &str,
) {
    common::init_logging();
    assert_eq!(add_origin(name, origin), expected);
}

#[rstest]
fn qualify_fqdn_is_unchanged(
    #[values("foo.", "www.example.com.", ".", r"a\.b.", r"a\\.")]
    name: &str,
    #[values("", ".", "example.com.", "example.com", "@")] origin: &str,
) {
    assert_eq!(add_origin(name, origin), name);
}

#[rstest]
fn qualify_apex_expands(
    #[values(".", "example.com.", "example.com", r"a\.b.example.")]
    origin: &str,
) {
    assert_eq!(add_origin(APEX, origin), origin);
}

#[rstest]
fn qualify_root_terminates(
    #[values("foo", "foo.", "www.example", r"a\.", r"a\\.")] name: &str,
) {
    let res = add_origin(name, ".");
    assert!(is_fqdn(&res));
    assert_eq!(add_origin(&res, "."), res);
}

//----------- trim_domain_name -----------------------------------------------

#[rstest]
#[case("foo.example.com.", "example.com.", "foo")]
#[case("example.com.", "example.com.", "@")]
#[case("foo.bar.", "example.com.", "foo.bar.")]
#[case("x.y.", ".", "x.y")]
#[case("", "example.com.", "@")]
#[case("example.com", "example.com.", "@")]
#[case("example.com.", "example.com", "@")]
#[case(".foo.", "foo.", "@")]
#[case(r"a\.b.example.com.", "example.com.", r"a\.b")]
#[case(r"a\.b.example.", "b.example.", r"a\.b.example.")]
#[case("www.a.example.", "a.example.", "www")]
#[case(r"foo\..example.com.", "example.com.", r"foo\.")]
#[case(r"a\", "", r"a\")]
#[case(r"x.b\", r"b\", "x")]
fn trim(#[case] name: &str, #[case] origin: &str, #[case] expected: &str) {
    common::init_logging();
    assert_eq!(trim_domain_name(name, origin), expected);
}

#[rstest]
fn trim_empty_is_apex(
    #[values("", ".", "example.com.", "example.com")] origin: &str,
) {
    assert_eq!(trim_domain_name("", origin), APEX);
}

#[rstest]
fn trim_self_is_apex(
    #[values("example.com.", "example.com", "com.", r"a\.b.example.")]
    name: &str,
) {
    assert_eq!(trim_domain_name(name, name), APEX);
}

#[rstest]
fn trim_outside_is_verbatim(
    #[values(
        "foo.bar.",
        "foo.bar",
        "Example.org.",
        r"ex\.ample.com.",
        ".",
        r"a\",
        r"a\\",
        r"a\."
    )]
    name: &str,
) {
    let res = trim_domain_name(name, "ample.com.");
    assert_eq!(res, name);
    assert_eq!(res.as_ptr(), name.as_ptr());
}

#[rstest]
fn trim_never_empty(
    #[values("", ".", "a", "a.", ".a.", "..", r"a\", r"\", r"a\\", r"a\.")]
    name: &str,
    #[values("", ".", "a", "a.", "example.com.")] origin: &str,
) {
    assert!(!trim_domain_name(name, origin).is_empty());
}

//----------- Round trips ----------------------------------------------------

#[rstest]
fn round_trip(
    #[values("foo", "www.foo", r"a\.b", "Mixed.Case")] name: &str,
    #[values("example.com.", "example.com", "com.", r"x\.y.example.")]
    origin: &str,
) {
    let qualified = add_origin(name, origin);
    assert_eq!(trim_domain_name(&qualified, origin), name);
}

#[test]
fn round_trip_one_way() {
    // The empty name comes back as the apex.
    let qualified = add_origin("", "example.com.");
    assert_eq!(trim_domain_name(&qualified, "example.com."), APEX);

    // Fully qualified names outside the origin are left alone both ways.
    let qualified = add_origin("foo.", "example.com.");
    assert_eq!(trim_domain_name(&qualified, "example.com."), "foo.");

    // With the root origin, the name comes back without its dot.
    let qualified = add_origin("foo.", ".");
    assert_eq!(trim_domain_name(&qualified, "."), "foo");
}

//----------- Origin ---------------------------------------------------------

#[test]
fn origin_from_zonefile_directive() {
    let origin: Origin = "example.com.".parse().unwrap();
    let names = ["@", "www", "mail.", "a.b"];
    let qualified: Vec<_> =
        names.iter().map(|name| origin.qualify(name)).collect();
    assert_eq!(
        qualified,
        ["example.com.", "www.example.com.", "mail.", "a.b.example.com."]
    );
    let trimmed: Vec<_> = qualified
        .iter()
        .map(|name| origin.relativize(name))
        .collect();
    assert_eq!(trimmed, ["@", "www", "mail.", "a.b"]);
}

#[test]
fn concurrent_use() {
    let origin = Origin::new("example.com.");
    thread::scope(|scope| {
        for i in 0..4 {
            let origin = &origin;
            scope.spawn(move || {
                let name = format!("host{i}");
                let qualified = origin.qualify(&name);
                assert_eq!(qualified, format!("host{i}.example.com."));
                assert_eq!(origin.relativize(&qualified), name);
            });
        }
    });
}
