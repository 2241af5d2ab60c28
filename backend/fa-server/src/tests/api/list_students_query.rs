use crate::ListStudentsQuery;

use googletest::prelude::*;

#[test]
fn given_negative_skip_and_huge_limit_when_bounded_then_clamped() {
    // Given
    let query = ListStudentsQuery {
        skip: -5,
        limit: 50_000,
    };

    // When
    let bounds = query.bounds();

    // Then
    assert_that!(bounds, eq((0, 1000)));
}

#[test]
fn given_zero_limit_when_bounded_then_at_least_one() {
    // Given
    let query = ListStudentsQuery { skip: 10, limit: 0 };

    // When
    let bounds = query.bounds();

    // Then
    assert_that!(bounds, eq((10, 1)));
}
