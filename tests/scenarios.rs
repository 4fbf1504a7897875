mod common;

use twofold::{Error, Optional, absent, attempt, err, ok, present};

#[derive(Debug, PartialEq)]
struct Boom(&'static str);

#[test]
fn chained_maps_on_present() {
    common::init_tracing();
    let value = present(5).map(|v: i32| v * 2).map(|v: i32| v * 10).unwrap_or(0);
    assert_eq!(value, 100);
}

#[test]
fn chained_maps_on_absent() {
    common::init_tracing();
    let value = absent::<i32>().map(|v: i32| v * 2).unwrap_or(0);
    assert_eq!(value, 0);
}

#[test]
fn failure_skips_map_and_feeds_map_err() {
    common::init_tracing();
    let fallback = err::<&str, i32>(123)
        .map(|v: &str| v.len())
        .map_or("default", |_: usize| "mapped");
    assert_eq!(fallback, "default");

    let value = err::<String, i32>(123).map(|v: String| v + "1").unwrap_or("default".into());
    assert_eq!(value, "default");

    assert_eq!(err::<(), i32>(123).map_err(|e: i32| e + 1).unwrap_err(), 124);
}

#[test]
fn and_then_validates() {
    common::init_tracing();
    let checked = ok::<&str, &str>("abc")
        .and_then(|v: &str| if v.len() == 3 { ok(true) } else { err("bad") });
    assert!(checked.unwrap());

    let rejected = ok::<&str, &str>("abcd")
        .and_then(|v: &str| if v.len() == 3 { ok(true) } else { err("bad") });
    assert_eq!(rejected.unwrap_err(), "bad");
}

#[test]
fn attempt_captures_the_raised_value() {
    common::init_tracing();
    let result = attempt(|| -> u32 { std::panic::panic_any(Boom("boom")) });
    assert!(result.is_err());
    let panic = result.unwrap_err();
    assert_eq!(panic.downcast::<Boom>().ok(), Some(Boom("boom")));
}

#[test]
fn attempt_passes_through_a_normal_return() {
    common::init_tracing();
    assert_eq!(attempt(|| "fine").unwrap(), "fine");
}

#[test]
fn zip_pairs_values() {
    common::init_tracing();
    assert_eq!(present("x").zip(present("y")).unwrap(), ("x", "y"));
    assert!(present("x").zip(absent::<&str>()).is_absent());
}

#[test]
fn every_accessor_error_is_catchable() {
    common::init_tracing();
    let caught = [
        attempt(|| absent::<u8>().unwrap()).unwrap_err(),
        attempt(|| err::<u8, &str>("bad").unwrap()).unwrap_err(),
        attempt(|| ok::<u8, &str>(1).unwrap_err()).unwrap_err(),
        attempt(|| err::<u8, &str>("bad").expect("wanted a value")).unwrap_err(),
        attempt(|| ok::<u8, &str>(1).expect_err("wanted an error")).unwrap_err(),
    ];

    let errors: Vec<Error> = caught.iter().filter_map(|panic| panic.error().cloned()).collect();
    assert_eq!(
        errors,
        vec![
            Error::EmptyValue,
            Error::UnwrappedFailure("\"bad\"".into()),
            Error::UnwrappedSuccess,
            Error::UnmetExpectation("wanted a value".into()),
            Error::UnmetExpectation("wanted an error".into()),
        ]
    );
}

#[test]
fn checked_accessors_compose_with_question_mark() {
    common::init_tracing();

    fn lookup(key: &str) -> Optional<u32> {
        match key {
            "port" => present(8080),
            _ => absent(),
        }
    }

    fn resolve(key: &str) -> Result<u32, Error> {
        let port = lookup(key).try_unwrap()?;
        Ok(port + 1)
    }

    assert_eq!(resolve("port"), Ok(8081));
    assert_eq!(resolve("host"), Err(Error::EmptyValue));
}
